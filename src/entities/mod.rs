pub mod rating_session;
