pub mod knowledge_base;
pub mod marketing_service;
pub mod opinion_service;
pub mod sentiment_service;
