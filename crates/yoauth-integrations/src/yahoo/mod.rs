mod oauth;

pub use oauth::YahooAuth;
