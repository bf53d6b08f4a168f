pub mod accounts;

pub use accounts::{
    admin_panel, block_users, delete_users, health_check, login, register, root, unlock_users,
};
