use crate::{Cli, Commands, DemoAccount, LangCommands};

use clap::Parser;

#[test]
fn given_demo_login_args_when_parsed_then_account_selected() {
    let cli = Cli::try_parse_from(["songkoffi", "demo-login", "admin", "--pretty"]).unwrap();

    assert!(cli.pretty);
    assert!(matches!(
        cli.command,
        Commands::DemoLogin {
            account: DemoAccount::Admin
        }
    ));
}

#[test]
fn given_signup_without_phone_when_parsed_then_phone_absent() {
    let cli = Cli::try_parse_from([
        "songkoffi",
        "signup",
        "--name",
        "Minh Anh",
        "--email",
        "minhanh@example.com",
        "--password",
        "secret1",
        "--confirm-password",
        "secret1",
    ])
    .unwrap();

    match cli.command {
        Commands::Signup { name, phone, .. } => {
            assert_eq!(name, "Minh Anh");
            assert_eq!(phone, None);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn given_unsupported_language_when_parsed_then_rejected() {
    assert!(Cli::try_parse_from(["songkoffi", "lang", "set", "fr"]).is_err());

    let cli = Cli::try_parse_from(["songkoffi", "lang", "set", "en"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Lang {
            action: LangCommands::Set { .. }
        }
    ));
}

#[test]
fn given_config_dir_flag_after_command_when_parsed_then_global() {
    let cli = Cli::try_parse_from(["songkoffi", "whoami", "--config-dir", "/tmp/sk"]).unwrap();

    assert_eq!(cli.config_dir, Some(std::path::PathBuf::from("/tmp/sk")));
}
