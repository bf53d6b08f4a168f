pub mod account;

pub use account::{
    Account, AccountStatus, AccountSummary, LoginRequest, LoginResponse, NewAccount, Position,
    RegisterRequest, UserIdsRequest,
};
