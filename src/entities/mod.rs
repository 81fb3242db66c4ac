//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod fund_contribution;
pub mod gift_idea;
pub mod gift_idea_comment;
pub mod gift_idea_upvote;
pub mod party;
pub mod user;
pub mod user_role;

// Re-export specific types to avoid conflicts
pub use fund_contribution::{
    Column as FundContributionColumn, Entity as FundContribution, Model as FundContributionModel,
};
pub use gift_idea::{Column as GiftIdeaColumn, Entity as GiftIdea, Model as GiftIdeaModel};
pub use gift_idea_comment::{
    Column as GiftIdeaCommentColumn, Entity as GiftIdeaComment, Model as GiftIdeaCommentModel,
};
pub use gift_idea_upvote::{
    Column as GiftIdeaUpvoteColumn, Entity as GiftIdeaUpvote, Model as GiftIdeaUpvoteModel,
};
pub use party::{Column as PartyColumn, Entity as Party, Model as PartyModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use user_role::{Column as UserRoleColumn, Entity as UserRole, Model as UserRoleModel};
