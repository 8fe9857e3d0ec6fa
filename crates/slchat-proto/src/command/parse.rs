//! Line parsing.
//!
//! A client line has the shape
//!
//! ```text
//! [:prefix] <VERB> [params...] [:trailing]
//! ```
//!
//! The prefix is accepted and ignored: the sender is always the connection
//! the line arrived on. Verbs are case-insensitive.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use super::types::{Command, CommandKind, UserId};
use crate::error::ParseError;

/// Parse the optional prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the verb (1*letter).
fn parse_verb(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic())(input)
}

/// Split the remainder after the verb into parameters.
///
/// Runs of spaces separate parameters. A parameter starting with `:` is the
/// trailing parameter and swallows the rest of the line, spaces included.
fn parse_params(input: &str) -> (&str, SmallVec<[&str; 4]>) {
    let mut params: SmallVec<[&str; 4]> = SmallVec::new();
    let mut rest = input;

    while let Some(b' ') = rest.as_bytes().first().copied() {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            rest = "";
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    (rest, params)
}

fn split_line(input: &str) -> IResult<&str, (&str, SmallVec<[&str; 4]>)> {
    let (input, _) = space0(input)?;
    let (input, _prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (input, verb) = parse_verb(input)?;
    let (rest, params) = parse_params(input);
    Ok((rest, (verb, params)))
}

fn expect_arity(command: &'static str, params: &[&str], expected: usize) -> Result<(), ParseError> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(ParseError::WrongArity {
            command,
            expected,
            got: params.len(),
        })
    }
}

fn parse_flag(flag: &str) -> Result<bool, ParseError> {
    match flag {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(ParseError::InvalidFlag(other.to_owned())),
    }
}

/// Parse a raw client line into a [`Command`] issued by `sender_id`, whose
/// current nickname is `sender`.
///
/// Only syntax is checked here; whether names are valid, channels exist and
/// so on is decided when the command is applied.
pub fn parse_line(sender_id: UserId, sender: &str, line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Err(ParseError::EmptyLine);
    }

    let (rest, (verb, params)) = match split_line(line) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(ParseError::Malformed {
                position: line.len() - e.input.len(),
            });
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(ParseError::Malformed {
                position: line.len(),
            });
        }
    };
    if !rest.is_empty() {
        return Err(ParseError::Malformed {
            position: line.len() - rest.len(),
        });
    }

    let kind = match verb.to_ascii_uppercase().as_str() {
        "NICK" => {
            expect_arity("NICK", &params, 1)?;
            CommandKind::Nick {
                new_nick: params[0].to_owned(),
            }
        }
        "CREATE" => {
            expect_arity("CREATE", &params, 2)?;
            CommandKind::Create {
                channel: params[0].to_owned(),
                invite_only: parse_flag(params[1])?,
            }
        }
        "JOIN" => {
            expect_arity("JOIN", &params, 1)?;
            CommandKind::Join {
                channel: params[0].to_owned(),
            }
        }
        "MESG" => {
            expect_arity("MESG", &params, 2)?;
            CommandKind::Message {
                channel: params[0].to_owned(),
                text: params[1].to_owned(),
            }
        }
        "LEAVE" => {
            expect_arity("LEAVE", &params, 1)?;
            CommandKind::Leave {
                channel: params[0].to_owned(),
            }
        }
        "INVITE" => {
            expect_arity("INVITE", &params, 2)?;
            CommandKind::Invite {
                channel: params[0].to_owned(),
                target: params[1].to_owned(),
            }
        }
        "KICK" => {
            expect_arity("KICK", &params, 2)?;
            CommandKind::Kick {
                channel: params[0].to_owned(),
                target: params[1].to_owned(),
            }
        }
        _ => return Err(ParseError::UnknownCommand(verb.to_owned())),
    };

    Ok(Command::new(sender_id, sender, kind))
}
