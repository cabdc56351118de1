//! Property-based tests for the game text codec.
//!
//! These tests verify that section sizing agrees with parsing, that decoded
//! graphs are symmetric, and that encoded games decode back unchanged.
//! Run with: cargo test --release prop_codec

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use officewars::codec::{
    encode_game, encode_nodes, encode_players, encode_rounds, encode_states, split_lines,
    ActionDecoder, LineCursor, NodeDecoder, PlayerDecoder, SectionDecoder, StateDecoder,
};
use officewars::config::TrailingPolicy;
use officewars::game::{link_nodes, DEFAULT_COORDINATE_SCALE};
use officewars::{
    Action, ActionKind, ActionLayout, ConnectivityScan, FormatConfig, Game, GameDecoder,
    GameInspector, InspectConfig, InspectorAdapter, Player, Position, State,
};

type RawAction = (usize, usize, usize, bool);

/// Build a game from generated parts, keeping every index in range.
fn assemble(
    players: Vec<(String, String, String)>,
    links: &[bool],
    coords: Vec<(i16, i16, i16)>,
    rounds: Vec<Vec<RawAction>>,
    states: Vec<Vec<Option<usize>>>,
) -> Game {
    let node_count = coords.len();
    let player_count = players.len();

    let pairs = (0..node_count).flat_map(|a| (a + 1..node_count).map(move |b| (a, b)));
    let edges: Vec<_> = pairs
        .zip(links)
        .filter(|(_, linked)| **linked)
        .map(|(edge, _)| edge)
        .collect();

    let positions = coords
        .into_iter()
        .map(|(x, y, z)| {
            let raw = [f32::from(x) / 1000.0, f32::from(y) / 1000.0, f32::from(z) / 1000.0];
            Position::from_raw(raw, DEFAULT_COORDINATE_SCALE)
        })
        .collect();

    let rounds = if player_count == 0 || node_count == 0 {
        Vec::new()
    } else {
        rounds
            .into_iter()
            .map(|round| {
                round
                    .into_iter()
                    .map(|(player, from, to, attack)| Action {
                        player,
                        from,
                        to,
                        kind: if attack { ActionKind::Attack } else { ActionKind::Support },
                    })
                    .collect()
            })
            .collect()
    };

    let states = states
        .into_iter()
        .map(|owners| {
            State::new(
                owners
                    .into_iter()
                    .map(|owner| owner.filter(|_| player_count > 0))
                    .collect(),
            )
        })
        .collect();

    Game {
        id: "prop".to_string(),
        name: "Generated".to_string(),
        status: "1".to_string(),
        players: players
            .into_iter()
            .map(|(name, color, secret)| Player::new(name, color, secret))
            .collect(),
        nodes: link_nodes(positions, &edges),
        rounds,
        states,
    }
}

fn game_strategy() -> impl Strategy<Value = Game> {
    (0usize..5, 0usize..8).prop_flat_map(|(players, nodes)| {
        let owner = 0..players.max(1);
        (
            prop::collection::vec(
                ("[A-Za-z][A-Za-z0-9]{0,10}", "#[0-9a-f]{6}", "[A-Za-z0-9]{1,8}"),
                players,
            ),
            prop::collection::vec(any::<bool>(), nodes * nodes.saturating_sub(1) / 2),
            prop::collection::vec((-1000i16..1000, -1000i16..1000, -1000i16..1000), nodes),
            prop::collection::vec(
                prop::collection::vec(
                    (0..players.max(1), 0..nodes.max(1), 0..nodes.max(1), any::<bool>()),
                    0..4,
                ),
                0..4,
            ),
            prop::collection::vec(
                prop::collection::vec(prop::option::of(owner), nodes),
                0..4,
            ),
        )
            .prop_map(|(players, links, coords, rounds, states)| {
                assemble(players, &links, coords, rounds, states)
            })
    })
}

/// Row-major cells of a square adjacency matrix with up to eight nodes.
fn adjacency_strategy() -> impl Strategy<Value = Vec<bool>> {
    (0usize..9).prop_flat_map(|m| prop::collection::vec(any::<bool>(), m * m))
}

fn layout_strategy() -> impl Strategy<Value = ActionLayout> {
    prop_oneof![Just(ActionLayout::Inline), Just(ActionLayout::Stacked)]
}

/// Lines a section's encoding occupies, without the final empty line.
fn section_lines(text: &str) -> Vec<&str> {
    let mut lines = split_lines(text);
    assert_eq!(lines.pop(), Some(""));
    lines
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every section's size probe matches the lines its parser consumes.
    #[test]
    fn prop_required_lines_match_sections(game in game_strategy(), layout in layout_strategy()) {
        let players = encode_players(&game.players);
        let lines = section_lines(&players);
        let needed = PlayerDecoder.required_lines(LineCursor::new(&lines)).unwrap();
        prop_assert_eq!(needed, lines.len());

        let nodes = encode_nodes(&game.nodes, DEFAULT_COORDINATE_SCALE);
        let lines = section_lines(&nodes);
        let needed = NodeDecoder::default().required_lines(LineCursor::new(&lines)).unwrap();
        prop_assert_eq!(needed, lines.len());

        let rounds = encode_rounds(&game.rounds, layout);
        let lines = section_lines(&rounds);
        let needed = ActionDecoder::new(layout).required_lines(LineCursor::new(&lines)).unwrap();
        prop_assert_eq!(needed, lines.len());

        let states = encode_states(&game.states);
        let lines = section_lines(&states);
        let needed = StateDecoder.required_lines(LineCursor::new(&lines)).unwrap();
        prop_assert_eq!(needed, lines.len());
    }

    /// Encoding then decoding yields the same players, graph, rounds and states.
    #[test]
    fn prop_encoded_game_decodes_unchanged(game in game_strategy(), layout in layout_strategy()) {
        let config = FormatConfig {
            action_layout: layout,
            trailing: TrailingPolicy::Reject,
            ..FormatConfig::default()
        };
        let decoded = GameDecoder::new(config).decode(&encode_game(&game, &config)).unwrap();

        prop_assert!(decoded.same_structure(&game));
        prop_assert_eq!(&decoded.players, &game.players);
        prop_assert_eq!(&decoded.rounds, &game.rounds);
        prop_assert_eq!(&decoded.states, &game.states);
    }

    /// Decoded connections are symmetric and never self referential, and only
    /// the upper triangle of the adjacency rows is read.
    #[test]
    fn prop_adjacency_is_symmetric(cells in adjacency_strategy()) {
        let count = (0..).find(|m| m * m == cells.len()).unwrap();
        let mut text = format!("{count}\n");
        for row in cells.chunks(count.max(1)) {
            text.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
            text.push('\n');
        }
        for _ in 0..count {
            text.push_str("0,0,0\n");
        }

        let lines = section_lines(&text);
        let nodes = NodeDecoder::default().parse(LineCursor::new(&lines), ()).unwrap();

        for node in &nodes {
            prop_assert!(!node.is_connected_to(node.id));
            for &other in &node.connections {
                prop_assert!(nodes[other].is_connected_to(node.id));
            }
            for other in node.id + 1..count {
                prop_assert_eq!(node.is_connected_to(other), cells[node.id * count + other]);
            }
        }
    }

    /// Rebuilding through the inspector matches the decoded game.
    #[test]
    fn prop_inspector_matches_decoder(game in game_strategy(), upper in any::<bool>()) {
        let connectivity = if upper {
            ConnectivityScan::UpperTriangle
        } else {
            ConnectivityScan::AllPairs
        };
        let config = InspectConfig { connectivity, ..InspectConfig::default() };

        let mut inspector = GameInspector::new(&game);
        let rebuilt = InspectorAdapter::new(config).build(&mut inspector).unwrap();

        prop_assert!(rebuilt.same_structure(&game));
        prop_assert!(rebuilt.rounds.is_empty());
    }

    /// Arbitrary text never panics the decoder.
    #[test]
    fn prop_decode_never_panics(text in "[0-9a-z,. \\-\n]{0,300}") {
        let decoder = GameDecoder::default();
        let _ = decoder.decode(&text);
        let _ = decoder.decode_summary(&text);
        let _ = decoder.decode_list(&text);
    }
}
