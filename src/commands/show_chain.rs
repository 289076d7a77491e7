//! Implementation of the `passchain chain` command.

use super::load_chain;
use crate::chain::Chain;
use crate::cli::ChainArgs;
use crate::error::Result;

/// Execute the `passchain chain` command.
pub fn cmd_chain(args: ChainArgs) -> Result<()> {
    let chain = load_chain(args.config.as_deref())?;
    print!("{}", render_chain(&chain));
    Ok(())
}

fn render_chain(chain: &Chain) -> String {
    let mut out = String::new();
    for (i, step) in chain.steps().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", i + 1, step.name(), step.requirement()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn renders_default_chain() {
        let chain = Config::default().build_chain().unwrap();

        assert_eq!(
            render_chain(&chain),
            "1. not_empty: a non-empty password\n\
             2. length_in_range: length in [10, 12)\n\
             3. contains_character: the character 'S'\n\
             4. has_mixed_case: both lowercase and uppercase letters\n"
        );
    }
}
