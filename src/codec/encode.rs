//! Writes games back into the text format.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use crate::codec::NO_OWNER;
use crate::config::{ActionLayout, FormatConfig};
use crate::game::{Game, GameSummary, Node, Player, Round, State};

/// Encode a full game.
#[must_use]
pub fn encode_game(game: &Game, config: &FormatConfig) -> String {
    let mut output = String::new();
    push_header(&mut output, &game.id, &game.name, &game.status);
    output.push_str(&encode_players(&game.players));
    output.push_str(&encode_nodes(&game.nodes, config.coordinate_scale));
    output.push_str(&encode_rounds(&game.rounds, config.action_layout));
    output.push_str(&encode_states(&game.states));
    output
}

/// Encode the header, players and nodes of a game.
#[must_use]
pub fn encode_summary(summary: &GameSummary, config: &FormatConfig) -> String {
    let mut output = String::new();
    push_header(&mut output, &summary.id, &summary.name, &summary.status);
    output.push_str(&encode_players(&summary.players));
    output.push_str(&encode_nodes(&summary.nodes, config.coordinate_scale));
    output
}

/// Encode a game list: the count, then each summary.
#[must_use]
pub fn encode_list(games: &[GameSummary], config: &FormatConfig) -> String {
    let mut output = format!("{}\n", games.len());
    for game in games {
        output.push_str(&encode_summary(game, config));
    }
    output
}

/// Encode the player block.
#[must_use]
pub fn encode_players(players: &[Player]) -> String {
    let mut output = format!("{}\n", players.len());
    for player in players {
        output.push_str(&format!(
            "{}\n{}\n{}\n",
            player.name, player.color, player.secret
        ));
    }
    output
}

/// Encode the node block.
///
/// Adjacency rows are written in full with both triangles filled; positions
/// are converted back to raw coordinates with five decimals.
#[must_use]
pub fn encode_nodes(nodes: &[Node], coordinate_scale: f32) -> String {
    let mut output = format!("{}\n", nodes.len());
    for node in nodes {
        let row: String = (0..nodes.len())
            .map(|other| if node.is_connected_to(other) { '1' } else { '0' })
            .collect();
        output.push_str(&row);
        output.push('\n');
    }
    for node in nodes {
        let [x, y, z] = node.position.to_raw(coordinate_scale);
        output.push_str(&format!("{x:.5},{y:.5},{z:.5}\n"));
    }
    output
}

/// Encode the action log.
#[must_use]
pub fn encode_rounds(rounds: &[Round], layout: ActionLayout) -> String {
    let mut output = format!("{}\n", rounds.len());
    for round in rounds {
        output.push_str(&format!("{}\n", round.len()));
        for action in round {
            let fields = [action.player, action.from, action.to];
            let code = action.kind.code();
            match layout {
                ActionLayout::Inline => output.push_str(&format!(
                    "{} {} {} {code}\n",
                    fields[0], fields[1], fields[2]
                )),
                ActionLayout::Stacked => {
                    for field in fields {
                        output.push_str(&format!("{field}\n"));
                    }
                    output.push_str(&format!("{code}\n"));
                }
            }
        }
    }
    output
}

/// Encode the ownership snapshots.
#[must_use]
pub fn encode_states(states: &[State]) -> String {
    let mut output = format!("{}\n", states.len());
    for state in states {
        let owners: Vec<String> = state
            .owners
            .iter()
            .map(|owner| owner.map_or_else(|| NO_OWNER.to_string(), |id| id.to_string()))
            .collect();
        output.push_str(&owners.join(","));
        output.push('\n');
    }
    output
}

fn push_header(output: &mut String, id: &str, name: &str, status: &str) {
    output.push_str(&format!("{id}\n{name}\n{status}\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::GameDecoder;
    use crate::game::{link_nodes, Action, ActionKind, Position};

    fn sample() -> Game {
        Game {
            id: "g7".to_string(),
            name: "Quarterly Review".to_string(),
            status: "1".to_string(),
            players: vec![
                Player::new("Alice", "#ff0000", "a"),
                Player::new("Bob", "#00ff00", "b"),
            ],
            nodes: link_nodes(
                vec![
                    Position::new(1.0, 2.0, -0.1),
                    Position::new(-3.0, 4.0, -0.5),
                    Position::new(5.0, -6.0, -0.2),
                ],
                &[(0, 1), (1, 2)],
            ),
            rounds: vec![vec![Action {
                player: 1,
                from: 2,
                to: 1,
                kind: ActionKind::Support,
            }]],
            states: vec![State::new(vec![Some(0), None, Some(1)])],
        }
    }

    #[test]
    fn test_encode_nodes() {
        let text = encode_nodes(&sample().nodes, 10.0);
        assert_eq!(
            text,
            concat!(
                "3\n010\n101\n010\n",
                "0.10000,0.20000,0.01000\n-0.30000,0.40000,0.05000\n0.50000,-0.60000,0.02000\n",
            )
        );
    }

    #[test]
    fn test_encode_states_writes_sentinel() {
        assert_eq!(encode_states(&sample().states), "1\n0,-1,1\n");
    }

    #[test]
    fn test_encode_rounds_layouts() {
        let rounds = sample().rounds;
        assert_eq!(encode_rounds(&rounds, ActionLayout::Inline), "1\n1\n1 2 1 1\n");
        assert_eq!(encode_rounds(&rounds, ActionLayout::Stacked), "1\n1\n1\n2\n1\n1\n");
    }

    #[test]
    fn test_game_survives_reencoding() {
        let game = sample();
        for layout in [ActionLayout::Inline, ActionLayout::Stacked] {
            let config = FormatConfig {
                action_layout: layout,
                ..FormatConfig::default()
            };
            let decoded = GameDecoder::new(config)
                .decode(&encode_game(&game, &config))
                .unwrap();
            assert!(decoded.same_structure(&game));
            assert_eq!(decoded.players, game.players);
            assert_eq!(decoded.rounds, game.rounds);
            assert_eq!(decoded.status, "1");
        }
    }

    #[test]
    fn test_list_survives_reencoding() {
        let games = vec![sample().summary(), sample().summary()];
        let config = FormatConfig::default();
        let decoded = GameDecoder::new(config)
            .decode_list(&encode_list(&games, &config))
            .unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].players, games[1].players);
    }
}
