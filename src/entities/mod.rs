//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables; there are no relations
//! between them (the league-number match used by the relay path is a soft
//! join by value, not a foreign key).

pub mod announcement;
pub mod league;
pub mod quick_link;
pub mod resource;
pub mod user;

// Re-export specific types to avoid conflicts
pub use announcement::{
    Column as AnnouncementColumn, Entity as Announcement, Model as AnnouncementModel,
};
pub use league::{Column as LeagueColumn, Entity as League, Model as LeagueModel};
pub use quick_link::{Column as QuickLinkColumn, Entity as QuickLink, Model as QuickLinkModel};
pub use resource::{Column as ResourceColumn, Entity as Resource, Model as ResourceModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
