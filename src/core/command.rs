//! Command context: the query facade over one invocation
//!
//! CommandContext builds the token sequence, switch set and definition map
//! once, caches the leading and trailing positionals, and answers every
//! question a program asks about its own command line.
//!
//! # Total Queries
//!
//! No query fails. Absent tokens yield an empty string, absent flags `false`.
//! Validation of what the caller expected is left to the caller.
//!
//! # Flag Presence
//!
//! `is_flag_present` and friends test exact membership in the raw token list
//! (first occurrence), not the switch set. A flag that took an adjacent value
//! is still present, and a joined token such as `--out=bin` is only matched by
//! its full text. Use `has_definition` to query joined keys.

use crate::core::{DefinitionMap, SwitchSet, TokenSequence};
use crate::types::{
    is_flag_like, split_joined, takes_adjacent_value, Token, TokenKind, SEPARATOR,
};
use std::io::{self, Write};
use tracing::debug;

/// Number of leading positional slots cached at construction
const LEADING_POSITIONALS: usize = 5;

/// Classified view of a single program invocation
///
/// Read-only after construction, so it can be shared across threads freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    tokens: TokenSequence,
    switches: SwitchSet,
    definitions: DefinitionMap,
    count: usize,
    leading: [Token; LEADING_POSITIONALS],
    trailing: Token,
}

impl CommandContext {
    /// Classify the given tokens (executable name already removed)
    ///
    /// ```
    /// use commandlines::CommandContext;
    ///
    /// let ctx = CommandContext::new(["build", "-v", "--out=bin", "--name", "app"]);
    /// assert!(ctx.has_switch("-v"));
    /// assert_eq!(ctx.definition_value("--out"), "bin");
    /// assert_eq!(ctx.definition_value("--name"), "app");
    /// assert_eq!(ctx.last_positional(), "app");
    /// ```
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        CommandContext::from_sequence(TokenSequence::new(tokens))
    }

    /// Classify the current process arguments, skipping the executable name
    ///
    /// Arguments that are not valid UTF-8 are converted lossily rather than
    /// rejected.
    pub fn from_env() -> Self {
        CommandContext::new(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Classify an existing token sequence
    pub fn from_sequence(tokens: TokenSequence) -> Self {
        let switches = SwitchSet::from_tokens(&tokens);
        let definitions = DefinitionMap::from_tokens(&tokens);
        let count = tokens.len();
        let leading = std::array::from_fn(|i| tokens.at(i).to_string());
        let trailing = match count.checked_sub(1) {
            Some(last) => tokens.at(last).to_string(),
            None => Token::new(),
        };

        debug!(
            tokens = count,
            switches = switches.len(),
            definitions = definitions.len(),
            "classified command line"
        );

        CommandContext {
            tokens,
            switches,
            definitions,
            count,
            leading,
            trailing,
        }
    }

    /// The underlying token sequence
    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// The tokens classified as switches
    pub fn switches(&self) -> &SwitchSet {
        &self.switches
    }

    /// The tokens classified as definitions
    pub fn definitions(&self) -> &DefinitionMap {
        &self.definitions
    }

    /// Total number of tokens
    pub fn count(&self) -> usize {
        self.count
    }

    /// The n-th token, or an empty string if out of range
    ///
    /// The first five slots are served from the cache.
    pub fn positional(&self, index: usize) -> &str {
        match self.leading.get(index) {
            Some(token) => token.as_str(),
            None => self.tokens.at(index),
        }
    }

    /// The last token, or an empty string for an empty invocation
    pub fn last_positional(&self) -> &str {
        &self.trailing
    }

    /// First positional, conventionally the subcommand
    pub fn subcommand(&self) -> &str {
        &self.leading[0]
    }

    /// Second positional, conventionally the nested subcommand
    pub fn sub_subcommand(&self) -> &str {
        &self.leading[1]
    }

    pub fn has_any_arguments(&self) -> bool {
        self.count > 0
    }

    pub fn has_exact_count(&self, n: usize) -> bool {
        self.count == n
    }

    pub fn has_switches(&self) -> bool {
        !self.switches.is_empty()
    }

    pub fn has_definitions(&self) -> bool {
        !self.definitions.is_empty()
    }

    pub fn has_switch(&self, token: &str) -> bool {
        self.switches.contains(token)
    }

    pub fn has_definition(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Value of a definition, or an empty string if `key` was not defined
    pub fn definition_value(&self, key: &str) -> &str {
        self.definitions.get(key)
    }

    /// Token following the first occurrence of `token`
    ///
    /// Empty if `token` is absent or is the last token.
    pub fn next_positional_after(&self, token: &str) -> &str {
        match self.tokens.position_of(token) {
            Some(position) => self.tokens.next_after(position),
            None => "",
        }
    }

    /// Returns true if `flag` is flag-like and occurs in the raw tokens
    ///
    /// With `require_value`, the token after the first occurrence must also
    /// be non-empty and not flag-like.
    pub fn is_flag_present(&self, flag: &str, require_value: bool) -> bool {
        if !is_flag_like(flag) {
            return false;
        }
        let Some(position) = self.tokens.position_of(flag) else {
            return false;
        };
        if !require_value {
            return true;
        }
        let value = self.tokens.next_after(position);
        !value.is_empty() && !is_flag_like(value)
    }

    /// Same as `is_flag_present` with a value required
    pub fn is_flag_with_value_present(&self, flag: &str) -> bool {
        self.is_flag_present(flag, true)
    }

    /// Token following the first occurrence of `flag`, or an empty string
    pub fn flag_value(&self, flag: &str) -> &str {
        self.next_positional_after(flag)
    }

    /// Inline value of the first raw token that starts with `flag_prefix` and
    /// contains a separator
    ///
    /// Only the first separator splits: `--opt=a=b` yields `a=b`.
    pub fn flag_value_joined(&self, flag_prefix: &str) -> &str {
        self.tokens
            .iter()
            .find(|token| token.starts_with(flag_prefix) && token.contains(SEPARATOR))
            .and_then(|token| token.split_once(SEPARATOR))
            .map_or("", |(_, value)| value)
    }

    pub fn has_any_flag(&self) -> bool {
        self.has_switches()
    }

    /// `--help` or `-h` was passed
    pub fn wants_help(&self) -> bool {
        self.is_flag_present("--help", false) || self.is_flag_present("-h", false)
    }

    /// `--usage` was passed
    pub fn wants_usage(&self) -> bool {
        self.is_flag_present("--usage", false)
    }

    /// `--version` or `-v` was passed
    pub fn wants_version(&self) -> bool {
        self.is_flag_present("--version", false) || self.is_flag_present("-v", false)
    }

    /// Classify the token at `index`
    ///
    /// Joined tokens and keys that took an adjacent value are definitions,
    /// remaining bare flags are switches, everything else (including out of
    /// range) is positional.
    pub fn kind_of(&self, index: usize) -> TokenKind {
        let token = self.tokens.at(index);
        if split_joined(token).is_some() {
            return TokenKind::Definition;
        }
        if !is_flag_like(token) {
            return TokenKind::Positional;
        }
        let next = self.tokens.as_slice().get(index + 1).map(String::as_str);
        if takes_adjacent_value(token, next) {
            TokenKind::Definition
        } else {
            TokenKind::Switch
        }
    }

    /// Write every token with its index to `output`
    pub fn write_tokens(&self, output: &mut dyn Write) -> io::Result<()> {
        self.tokens.write_indexed(output)
    }

    /// Print every token with its index to stdout, for debugging
    pub fn dump_tokens(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_tokens(&mut handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn build_ctx() -> CommandContext {
        CommandContext::new(["build", "-v", "--out=bin", "--name", "app"])
    }

    #[rstest]
    fn test_mixed_invocation_views(build_ctx: CommandContext) {
        assert_eq!(build_ctx.switches().iter().collect::<Vec<_>>(), ["-v"]);
        assert_eq!(
            build_ctx.definitions().sorted(),
            [("--name", "app"), ("--out", "bin")]
        );
        assert_eq!(build_ctx.definition_value("--out"), "bin");
        assert!(build_ctx.has_switch("-v"));
        assert_eq!(build_ctx.last_positional(), "app");
        assert_eq!(build_ctx.count(), 5);
    }

    #[rstest]
    fn test_leading_positionals(build_ctx: CommandContext) {
        let expected = ["build", "-v", "--out=bin", "--name", "app"];
        for (i, token) in expected.iter().enumerate() {
            assert_eq!(build_ctx.positional(i), *token);
        }
        assert_eq!(build_ctx.positional(5), "");
        assert_eq!(build_ctx.subcommand(), "build");
        assert_eq!(build_ctx.sub_subcommand(), "-v");
    }

    #[test]
    fn test_positional_beyond_cache() {
        let ctx = CommandContext::new(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(ctx.positional(5), "f");
        assert_eq!(ctx.positional(6), "g");
        assert_eq!(ctx.positional(7), "");
        assert_eq!(ctx.last_positional(), "g");
    }

    #[test]
    fn test_empty_invocation() {
        let ctx = CommandContext::new(Vec::<String>::new());
        assert!(!ctx.has_any_arguments());
        assert!(ctx.has_exact_count(0));
        for i in 0..5 {
            assert_eq!(ctx.positional(i), "");
        }
        assert_eq!(ctx.last_positional(), "");
        assert!(!ctx.has_switches());
        assert!(!ctx.has_definitions());
        assert!(!ctx.has_any_flag());
        assert_eq!(ctx.next_positional_after("x"), "");
        assert_eq!(ctx.flag_value_joined("--"), "");
        assert!(!ctx.wants_help());
    }

    #[test]
    fn test_flag_followed_by_flag() {
        let ctx = CommandContext::new(["-x", "-y"]);
        assert!(!ctx.has_definition("-x"));
        assert!(ctx.is_flag_present("-x", false));
        assert!(!ctx.is_flag_present("-x", true));
        assert!(!ctx.is_flag_with_value_present("-x"));
        assert!(ctx.has_switch("-x"));
        assert!(ctx.has_switch("-y"));
    }

    #[test]
    fn test_joined_definition_splits_on_first_separator() {
        let ctx = CommandContext::new(["--opt=a=b"]);
        assert_eq!(ctx.definitions().sorted(), [("--opt", "a=b")]);
        assert_eq!(ctx.flag_value_joined("--opt"), "a=b");
    }

    #[rstest]
    #[case::present_without_value(&["--force"], "--force", false, true)]
    #[case::value_not_required(&["--out", "-q"], "--out", false, true)]
    #[case::value_present(&["--out", "dir"], "--out", true, true)]
    #[case::value_is_flag(&["--out", "-q"], "--out", true, false)]
    #[case::value_missing_at_end(&["--out"], "--out", true, false)]
    #[case::absent(&["build"], "--out", false, false)]
    #[case::not_flag_like(&["build", "x"], "build", false, false)]
    #[case::joined_only_matches_full_text(&["--out=bin"], "--out", false, false)]
    #[case::joined_full_text(&["--out=bin"], "--out=bin", false, true)]
    #[case::first_occurrence_decides(&["--out", "-q", "--out", "dir"], "--out", true, false)]
    fn test_is_flag_present(
        #[case] tokens: &[&str],
        #[case] flag: &str,
        #[case] require_value: bool,
        #[case] expected: bool,
    ) {
        let ctx = CommandContext::new(tokens.iter().copied());
        assert_eq!(ctx.is_flag_present(flag, require_value), expected);
    }

    #[rstest]
    #[case::value_present(&["--out", "dir"], true)]
    #[case::value_missing(&["--out"], false)]
    #[case::value_is_flag(&["--out", "--force"], false)]
    fn test_is_flag_with_value_present(#[case] tokens: &[&str], #[case] expected: bool) {
        let ctx = CommandContext::new(tokens.iter().copied());
        assert_eq!(ctx.is_flag_with_value_present("--out"), expected);
    }

    #[rstest]
    #[case::adjacent(&["--out", "dir"], "--out", "dir")]
    #[case::followed_by_flag(&["--out", "-q"], "--out", "-q")]
    #[case::at_end(&["--out"], "--out", "")]
    #[case::absent(&["x"], "--out", "")]
    fn test_flag_value(
        #[case] tokens: &[&str],
        #[case] flag: &str,
        #[case] expected: &str,
    ) {
        let ctx = CommandContext::new(tokens.iter().copied());
        assert_eq!(ctx.flag_value(flag), expected);
        assert_eq!(ctx.next_positional_after(flag), expected);
    }

    #[rstest]
    #[case::simple(&["--out=bin"], "--out", "bin")]
    #[case::first_match_wins(&["--out=a", "--out=b"], "--out", "a")]
    #[case::prefix_match(&["--output=dir"], "--out", "dir")]
    #[case::no_separator(&["--out", "bin"], "--out", "")]
    #[case::empty_value(&["--out="], "--out", "")]
    #[case::no_match(&["--in=x"], "--out", "")]
    fn test_flag_value_joined(
        #[case] tokens: &[&str],
        #[case] prefix: &str,
        #[case] expected: &str,
    ) {
        let ctx = CommandContext::new(tokens.iter().copied());
        assert_eq!(ctx.flag_value_joined(prefix), expected);
    }

    #[rstest]
    #[case::long_help(&["--help"], true, false, false)]
    #[case::short_help(&["sub", "-h"], true, false, false)]
    #[case::usage(&["--usage"], false, true, false)]
    #[case::long_version(&["--version"], false, false, true)]
    #[case::short_version(&["-v", "file"], false, false, true)]
    #[case::joined_help_is_not_help(&["--help=yes"], false, false, false)]
    #[case::positional_help_is_not_help(&["help"], false, false, false)]
    #[case::none(&["run"], false, false, false)]
    fn test_convenience_predicates(
        #[case] tokens: &[&str],
        #[case] help: bool,
        #[case] usage: bool,
        #[case] version: bool,
    ) {
        let ctx = CommandContext::new(tokens.iter().copied());
        assert_eq!(ctx.wants_help(), help);
        assert_eq!(ctx.wants_usage(), usage);
        assert_eq!(ctx.wants_version(), version);
    }

    #[rstest]
    fn test_kind_of(build_ctx: CommandContext) {
        assert_eq!(build_ctx.kind_of(0), TokenKind::Positional);
        assert_eq!(build_ctx.kind_of(1), TokenKind::Switch);
        assert_eq!(build_ctx.kind_of(2), TokenKind::Definition);
        assert_eq!(build_ctx.kind_of(3), TokenKind::Definition);
        assert_eq!(build_ctx.kind_of(4), TokenKind::Positional);
        assert_eq!(build_ctx.kind_of(5), TokenKind::Positional);
    }

    #[rstest]
    fn test_query_predicates(build_ctx: CommandContext) {
        assert!(build_ctx.has_any_arguments());
        assert!(build_ctx.has_exact_count(5));
        assert!(!build_ctx.has_exact_count(4));
        assert!(build_ctx.has_switches());
        assert!(build_ctx.has_definitions());
        assert!(build_ctx.has_any_flag());
        assert!(build_ctx.has_definition("--name"));
        assert!(!build_ctx.has_definition("--missing"));
        assert_eq!(build_ctx.definition_value("--missing"), "");
        assert_eq!(build_ctx.next_positional_after("build"), "-v");
        assert_eq!(build_ctx.next_positional_after("app"), "");
    }

    #[test]
    fn test_construction_is_idempotent() {
        let tokens = ["deploy", "--env", "prod", "-f", "--tag=v1"];
        let first = CommandContext::new(tokens);
        let second = CommandContext::new(tokens);
        assert_eq!(first.switches(), second.switches());
        assert_eq!(first.definitions(), second.definitions());
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_tokens() {
        let ctx = CommandContext::new(["run", "--fast"]);
        let mut output = Vec::new();
        ctx.write_tokens(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "argv[0] = run\nargv[1] = --fast\n"
        );
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommandContext>();
    }
}
