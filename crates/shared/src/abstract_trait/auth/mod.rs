mod login;
mod register;

pub use self::login::{DynLoginService, LoginServiceTrait};
pub use self::register::{DynRegisterService, RegisterServiceTrait};
