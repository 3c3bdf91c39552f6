use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "reposearch", &mut io::stdout());

    eprintln!();
    eprintln!("Save the output to the appropriate location for your shell:");
    match shell {
        Shell::Bash => {
            eprintln!("  reposearch completions bash > ~/.local/share/bash-completion/completions/reposearch");
        }
        Shell::Zsh => {
            eprintln!("  reposearch completions zsh > ~/.zsh/completions/_reposearch");
            eprintln!("  # (Add 'fpath=(~/.zsh/completions $fpath)' before 'compinit' in .zshrc)");
        }
        Shell::Fish => {
            eprintln!("  reposearch completions fish > ~/.config/fish/completions/reposearch.fish");
        }
        _ => {}
    }
}
