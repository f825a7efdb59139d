pub mod toast;
pub mod validation_feedback;

pub use toast::Toast;
pub use validation_feedback::EmailValidationFeedback;
