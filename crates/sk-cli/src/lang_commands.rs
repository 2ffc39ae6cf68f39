use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum LangCommands {
    /// Print the current language
    Get,

    /// Switch to a language
    Set {
        #[arg(value_parser = ["vi", "en"])]
        locale: String,
    },

    /// Switch between Vietnamese and English
    Toggle,
}
