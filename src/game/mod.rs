// Game state assembly

pub mod effects;
pub mod health;
pub mod player;

use crate::engine::audio::AudioPlayer;
use crate::engine::camera::CameraShake;
use crate::engine::input::PlayerInput;
use crate::engine::physics::{body::presets, PhysicsWorld};
use effects::EffectRegistry;
use health::Health;
use player::{Player, PlayerTunables};
use thiserror::Error;

/// Unrecoverable wiring faults at startup. There is no steady-state error
/// taxonomy; once the game is assembled, per-step logic does not fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("rigid body handle is not present in the physics world")]
    MissingBody,
    #[error("collider handle is not present in the physics world")]
    MissingCollider,
}

/// Everything the simulation owns: the physics world, the player with its
/// controllers, live attack effects, and the audio/camera collaborators.
pub struct Game {
    pub physics: PhysicsWorld,
    pub player: Player,
    pub effects: EffectRegistry,
    pub audio: AudioPlayer,
    pub camera: CameraShake,
    pub health: Health,
}

impl Game {
    /// Assemble a level: ground slab, player, and the damage-reaction
    /// subscription
    pub fn new() -> Result<Self, SetupError> {
        let mut physics = PhysicsWorld::new();

        // Ground slab with its top at y = 0
        let ground = physics.add_rigid_body(presets::terrain_body(0.0, -0.5));
        physics.add_collider(presets::ground_collider(60.0, 1.0), ground);

        let player = Player::spawn(&mut physics, 0.0, 1.5, PlayerTunables::default())?;

        let mut health = Health::new(100);
        health.on_changed(player.reaction.listener());

        Ok(Self {
            physics,
            player,
            effects: EffectRegistry::new(),
            audio: AudioPlayer::new(),
            camera: CameraShake::new(),
            health,
        })
    }

    /// Advance the whole simulation by one fixed step
    pub fn step(&mut self, input: &PlayerInput, dt: f32) {
        self.player.step(
            input,
            &mut self.physics,
            &mut self.effects,
            &mut self.audio,
            &mut self.camera,
            dt,
        );
        self.effects.step(dt, &mut self.physics);
        self.audio.step(dt);
        self.camera.step(dt);
        self.physics.step();
    }

    /// Run a batch of fixed updates for one frame. Edge state is consumed
    /// after each update, so a single key press is observed by exactly one
    /// update even when the loop is catching up.
    pub fn advance(&mut self, input: &mut PlayerInput, updates: u32, dt: f32) {
        for _ in 0..updates {
            self.step(input, dt);
            input.update();
        }
    }
}
