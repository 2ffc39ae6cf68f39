use crate::LangCommands;

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in with one of the demo accounts
    DemoLogin {
        #[arg(value_enum)]
        account: DemoAccount,
    },

    /// Create an account and sign in
    Signup {
        /// Full name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Open the admin dashboard (administrators only)
    Admin,

    /// Display language
    Lang {
        #[command(subcommand)]
        action: LangCommands,
    },

    /// Translate a text key in the current language
    T { key: String },

    /// Browse the menu
    Menu {
        /// all, espresso, coldbrew, signature, or pastry
        #[arg(long)]
        category: Option<String>,

        /// Matches name or description in the current language
        #[arg(long)]
        search: Option<String>,

        /// Only items highlighted on the home page
        #[arg(long)]
        featured: bool,
    },

    /// List blog posts
    Posts {
        #[arg(long)]
        featured: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAccount {
    Admin,
    User,
}
