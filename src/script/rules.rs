use super::ast::ParsedCommand;
use crate::export::Dialect;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, alphanumeric1, digit1, space1},
    combinator::{map, map_res, opt, recognize, value},
    multi::many0,
    sequence::{pair, preceded, tuple},
};

// --- Helpers ---

fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_"), tag("-")))),
        )),
        |s: &str| s.to_string(),
    )(input)
}

fn usize_parser(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

fn cell(input: &str) -> IResult<&str, (usize, usize)> {
    map(
        tuple((usize_parser, space1, usize_parser)),
        |(qubit, _, step)| (qubit, step),
    )(input)
}

fn dialect(input: &str) -> IResult<&str, Dialect> {
    alt((
        value(Dialect::Indexed, tag("indexed")),
        value(Dialect::Bare, tag("bare")),
    ))(input)
}

pub fn comment(input: &str) -> IResult<&str, ()> {
    value(
        (),
        pair(alt((tag("//"), tag("#"))), take_while(|c| c != '\n')),
    )(input)
}

// --- Command Parsers ---

pub fn lanes(input: &str) -> IResult<&str, ParsedCommand> {
    map(
        tuple((tag("lanes"), space1, usize_parser)),
        |(_, _, n)| ParsedCommand::SetLanes(n),
    )(input)
}

pub fn lane_buttons(input: &str) -> IResult<&str, ParsedCommand> {
    alt((
        value(ParsedCommand::AddLane, tag("add-lane")),
        value(ParsedCommand::RemoveLane, tag("remove-lane")),
    ))(input)
}

pub fn place(input: &str) -> IResult<&str, ParsedCommand> {
    map(
        tuple((tag("place"), space1, identifier, space1, cell)),
        |(_, _, gate, _, (qubit, step))| ParsedCommand::Place(gate, qubit, step),
    )(input)
}

pub fn drag(input: &str) -> IResult<&str, ParsedCommand> {
    map(preceded(pair(tag("drag"), space1), identifier), ParsedCommand::Drag)(input)
}

pub fn drop_at(input: &str) -> IResult<&str, ParsedCommand> {
    map(preceded(pair(tag("drop"), space1), cell), |(qubit, step)| {
        ParsedCommand::Drop(qubit, step)
    })(input)
}

pub fn quick(input: &str) -> IResult<&str, ParsedCommand> {
    map(preceded(pair(tag("quick"), space1), identifier), ParsedCommand::Quick)(input)
}

pub fn select(input: &str) -> IResult<&str, ParsedCommand> {
    map(
        preceded(pair(tag("select"), space1), identifier),
        ParsedCommand::Select,
    )(input)
}

pub fn erase(input: &str) -> IResult<&str, ParsedCommand> {
    map(
        preceded(tag("erase"), opt(preceded(space1, identifier))),
        ParsedCommand::Erase,
    )(input)
}

pub fn clear(input: &str) -> IResult<&str, ParsedCommand> {
    value(ParsedCommand::Clear, tag("clear"))(input)
}

pub fn export(input: &str) -> IResult<&str, ParsedCommand> {
    map(
        preceded(tag("export"), opt(preceded(space1, dialect))),
        ParsedCommand::Export,
    )(input)
}

/// Any single command.
pub fn command(input: &str) -> IResult<&str, ParsedCommand> {
    alt((
        lanes,
        lane_buttons,
        place,
        drag,
        drop_at,
        quick,
        select,
        erase,
        clear,
        export,
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rule() {
        assert_eq!(
            place("place phase_x 2 7"),
            Ok(("", ParsedCommand::Place("phase_x".to_string(), 2, 7)))
        );
        assert!(place("place phase_x 2").is_err());
    }

    #[test]
    fn test_erase_with_and_without_id() {
        assert_eq!(
            erase("erase g3"),
            Ok(("", ParsedCommand::Erase(Some("g3".to_string()))))
        );
        assert_eq!(erase("erase"), Ok(("", ParsedCommand::Erase(None))));
    }

    #[test]
    fn test_export_dialect() {
        assert_eq!(
            export("export bare"),
            Ok(("", ParsedCommand::Export(Some(Dialect::Bare))))
        );
        assert_eq!(export("export"), Ok(("", ParsedCommand::Export(None))));
    }

    #[test]
    fn test_lane_buttons() {
        assert_eq!(command("add-lane"), Ok(("", ParsedCommand::AddLane)));
        assert_eq!(command("remove-lane"), Ok(("", ParsedCommand::RemoveLane)));
        assert_eq!(command("lanes 6"), Ok(("", ParsedCommand::SetLanes(6))));
    }

    #[test]
    fn test_comment() {
        assert_eq!(comment("# seed layout"), Ok(("", ())));
        assert_eq!(comment("// seed layout"), Ok(("", ())));
    }
}
