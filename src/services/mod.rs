pub mod generator;
pub mod scoring;
pub mod session;
pub mod validator;
pub mod word_loader;
