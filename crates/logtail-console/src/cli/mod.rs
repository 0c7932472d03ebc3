/*
[INPUT]:  Parsed subcommands from main.rs
[OUTPUT]: Non-interactive entry points (init wizard, tail, one-shot commands)
[POS]:    CLI module root
[UPDATE]: When adding a subcommand
*/

pub mod init;
pub mod oneshot;
pub mod tail;
