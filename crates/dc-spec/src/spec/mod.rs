pub mod model;
pub mod question;

pub use model::QuestionModel;
pub use question::QuestionType;
