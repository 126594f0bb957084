use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    post-migrator completions bash > ~/.bash_completion.d/post-migrator\n\n\
                  Generate zsh completions:\n    post-migrator completions zsh > ~/.zfunc/_post-migrator\n\n\
                  Generate fish completions:\n    post-migrator completions fish > ~/.config/fish/completions/post-migrator.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
