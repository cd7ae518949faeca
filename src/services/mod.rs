pub mod ai_service;
pub mod comment_service;
pub mod message_service;
pub mod notification_service;
pub mod post_service;
pub mod professional_service;
