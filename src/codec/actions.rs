//! Action log: a round count, then per round an action count and records.

use crate::codec::{LineCursor, Roster, SectionDecoder};
use crate::config::ActionLayout;
use crate::error::{DecodeResult, Entity, SectionKind};
use crate::game::{Action, ActionKind, Round};

/// Integers per action record: player, from, to, type.
const FIELDS_PER_ACTION: usize = 4;

/// Decoder for the round-structured action log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionDecoder {
    layout: ActionLayout,
}

impl ActionDecoder {
    /// Create a decoder for records laid out as `layout`.
    #[must_use]
    pub const fn new(layout: ActionLayout) -> Self {
        Self { layout }
    }

    /// Tokens of the record starting at `index`, each with its line index.
    fn record<'a>(
        self,
        lines: LineCursor<'a>,
        index: usize,
    ) -> DecodeResult<[(usize, &'a str); FIELDS_PER_ACTION]> {
        let mut fields = [(index, ""); FIELDS_PER_ACTION];
        match self.layout {
            ActionLayout::Inline => {
                let text = lines.line(index)?;
                let mut tokens = text.split_whitespace();
                for field in &mut fields {
                    let token = tokens
                        .next()
                        .ok_or_else(|| lines.malformed(index, "action record", text))?;
                    *field = (index, token);
                }
                if tokens.next().is_some() {
                    return Err(lines.malformed(index, "action record", text));
                }
            }
            ActionLayout::Stacked => {
                for (offset, field) in fields.iter_mut().enumerate() {
                    let line = index + offset;
                    *field = (line, lines.line(line)?.trim());
                }
            }
        }
        Ok(fields)
    }

    fn action(
        self,
        lines: LineCursor<'_>,
        index: usize,
        roster: Roster<'_>,
    ) -> DecodeResult<Action> {
        let [player, from, to, kind] = self.record(lines, index)?;

        let resolve = |(line, token): (usize, &str), field, entity, bound| {
            let value = lines.parse_token(line, token, field)?;
            lines.resolve(line, entity, value, bound)
        };
        let player = resolve(player, "player index", Entity::Player, roster.players.len())?;
        let from = resolve(from, "node index", Entity::Node, roster.nodes.len())?;
        let to = resolve(to, "node index", Entity::Node, roster.nodes.len())?;

        let (line, token) = kind;
        let kind = lines
            .parse_token::<u32>(line, token, "action type")
            .ok()
            .and_then(ActionKind::from_code)
            .ok_or_else(|| lines.malformed(line, "action type", token))?;

        Ok(Action {
            player,
            from,
            to,
            kind,
        })
    }
}

impl SectionDecoder for ActionDecoder {
    type Output = Vec<Round>;
    type Context<'c> = Roster<'c>;

    const KIND: SectionKind = SectionKind::Actions;

    fn required_lines(&self, lines: LineCursor<'_>) -> DecodeResult<usize> {
        let lines = lines.within(Self::KIND);
        let rounds = lines.count(0)?;
        let per_action = self.layout.lines_per_action();

        let mut position = 1usize;
        for _ in 0..rounds {
            let actions = lines.count(position)?;
            position = position
                .saturating_add(1)
                .saturating_add(actions.saturating_mul(per_action));
        }
        Ok(position)
    }

    fn parse(&self, lines: LineCursor<'_>, roster: Roster<'_>) -> DecodeResult<Vec<Round>> {
        let lines = lines.within(Self::KIND);
        lines.ensure(self.required_lines(lines)?)?;
        let per_action = self.layout.lines_per_action();

        let rounds = lines.count(0)?;
        let mut position = 1;
        let mut decoded = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            let actions = lines.count(position)?;
            position += 1;

            let round = (0..actions)
                .map(|action| self.action(lines, position + action * per_action, roster))
                .collect::<DecodeResult<Round>>()?;
            position += actions * per_action;
            decoded.push(round);
        }
        Ok(decoded)
    }
}
