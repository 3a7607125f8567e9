use strum_macros::Display;

pub mod achievement;
pub mod leaderboard;
pub mod player;
pub mod remote;

/// The two configuration resource types the tool manages. The lowercase name
/// doubles as the string-resource key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Achievement,
    Leaderboard,
}

impl ResourceKind {
    /// Path segment used by the configuration API.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Achievement => "achievements",
            ResourceKind::Leaderboard => "leaderboards",
        }
    }
}

/// A compact desired-state record that can be expanded into a full resource.
pub trait ResourceInfo: Send + Sync {
    type Resource: ConfigurationResource;

    fn name(&self) -> &str;
    fn build_resource(&self) -> Self::Resource;
}

pub trait ConfigurationResource: Send + 'static {
    fn display_name(&self) -> &str;
}
