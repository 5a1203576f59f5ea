use rapier2d::prelude::*;

/// What kind of surface a collider represents.
///
/// Stored in the collider's `user_data` so game logic can ask "am I standing
/// on ground?" without string tags or out-of-band lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// No particular surface semantics (characters, projectiles, effects)
    None = 0,
    /// Walkable ground - gates footstep audio and landing logic
    Ground = 1,
    /// Vertical terrain
    Wall = 2,
    /// Damaging terrain (spikes, pits)
    Hazard = 3,
}

impl SurfaceKind {
    /// Encode for storage in a collider's `user_data`
    pub fn to_user_data(self) -> u128 {
        self as u128
    }

    /// Decode from a collider's `user_data`; unknown values map to `None`
    pub fn from_user_data(data: u128) -> Self {
        match data {
            1 => Self::Ground,
            2 => Self::Wall,
            3 => Self::Hazard,
            _ => Self::None,
        }
    }
}

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The player character
    Player = 0b0000_0010,

    /// Thrown projectiles
    Projectile = 0b0000_0100,

    /// Static terrain (ground, walls)
    Terrain = 0b0000_1000,

    /// Area attack effects (the wind gust)
    Effect = 0b0001_0000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The player collides with terrain only; damage sources notify
            // through the health collaborator, not through contact response
            CollisionGroups::Player => Group::from_bits_truncate(CollisionGroups::Terrain as u32),

            // Projectiles hit terrain and whatever is in the default group
            CollisionGroups::Projectile => Group::from_bits_truncate(
                CollisionGroups::Terrain as u32 | CollisionGroups::Default as u32,
            ),

            // Terrain blocks everything except the wind effect
            CollisionGroups::Terrain => Group::from_bits_truncate(
                CollisionGroups::Player as u32
                    | CollisionGroups::Projectile as u32
                    | CollisionGroups::Default as u32,
            ),

            // The wind effect is a sensor volume; it overlaps the default group
            CollisionGroups::Effect => Group::from_bits_truncate(CollisionGroups::Default as u32),

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}
