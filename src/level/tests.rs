use crate::direction::Direction;
use crate::entity::Kind;
use crate::event::{DisplayEvent, MessageSlot};
use crate::levels::LevelSource;
use crate::position::Position;

use super::{DeathCause, Level, LevelError, Outcome};

fn load(map: &'static str) -> Level {
    load_with(map, r#"{"name": "test"}"#)
}

fn load_with(map: &'static str, metadata: &'static str) -> Level {
    Level::load(&LevelSource {
        number: 1,
        map,
        metadata,
    })
    .unwrap()
}

fn pos(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

fn kind_at(level: &Level, x: usize, y: usize) -> Kind {
    level.grid.kind(level.grid.get(pos(x, y)))
}

fn player_pos(level: &Level) -> Position {
    level.grid.position(level.player).unwrap()
}

#[test]
fn player_walks_into_space() {
    let mut level = load(
        r"
#####
#@  #
#####
",
    );
    let outcome = level.run(Direction::Right);
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(player_pos(&level), pos(2, 1));
    assert_eq!(kind_at(&level, 1, 1), Kind::Space);
    assert_eq!(level.moves, -1);
    level.grid.check_consistency();
}

#[test]
fn player_blocked_by_wall_still_spends_a_move() {
    let mut level = load(
        r"
####
#@ #
####
",
    );
    level.run(Direction::Left);
    assert_eq!(player_pos(&level), pos(1, 1));
    assert_eq!(level.moves, -1);
    assert_eq!(level.outcome, Outcome::InProgress);
}

#[test]
fn player_digs_earth_for_a_point() {
    let mut level = load(
        r"
#####
#@: #
#####
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(2, 1));
    assert_eq!(level.score(), 1);
}

#[test]
fn player_collects_treasure() {
    let mut level = load(
        r"
#####
#@* #
#####
",
    );
    assert_eq!(level.treasure_remaining(), 1);
    level.run(Direction::Right);
    assert_eq!(level.treasure_remaining(), 0);
    assert_eq!(level.score(), 10);
    assert_eq!(player_pos(&level), pos(2, 1));
}

#[test]
fn exit_is_gated_until_all_treasure_is_found() {
    let mut level = load(
        r"
######
#@X* #
######
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(1, 1));
    assert_eq!(level.outcome, Outcome::InProgress);
}

#[test]
fn exit_pays_the_finishing_bonus() {
    let mut level = load(
        r"
######
#@*X #
######
",
    );
    level.run(Direction::Right);
    let outcome = level.run(Direction::Right);
    assert_eq!(outcome, Outcome::Won);
    assert_eq!(level.score(), 260);
}

#[test]
fn landmine_kills_the_player() {
    let mut level = load(
        r"
#####
#@! #
#####
",
    );
    let outcome = level.run(Direction::Right);
    assert_eq!(outcome, Outcome::Lost(DeathCause::Landmine));
    assert_eq!(kind_at(&level, 2, 1), Kind::Dead);
    let events = level.take_events();
    assert!(events.contains(&DisplayEvent::Message {
        slot: MessageSlot::Status,
        text: "Killed by an exploding landmine".to_string(),
    }));
}

#[test]
fn time_capsule_grants_moves_and_score() {
    let mut level = load(
        r"
#####
#@C #
#####
",
    );
    level.run(Direction::Right);
    assert_eq!(level.score(), 5);
    assert_eq!(level.moves, 249);
    assert_eq!(level.max_moves, 250);
}

#[test]
fn running_out_of_moves_starves_the_player() {
    let mut level = load_with(
        r"
#####
#@  #
#####
",
        r#"{"name": "test", "moves": 2}"#,
    );
    level.run(Direction::Right);
    assert_eq!(level.outcome, Outcome::InProgress);
    let outcome = level.run(Direction::Left);
    assert_eq!(outcome, Outcome::Lost(DeathCause::Starvation));
    assert_eq!(kind_at(&level, 1, 1), Kind::Dead);
}

#[test]
fn unlimited_budget_counts_downward_without_starving() {
    let mut level = load(
        r"
#####
#@  #
#####
",
    );
    level.run(Direction::Right);
    level.run(Direction::Left);
    level.run(Direction::Right);
    assert_eq!(level.moves, -3);
    assert_eq!(level.outcome, Outcome::InProgress);
}

#[test]
fn stationary_boulder_above_the_player_is_harmless() {
    let mut level = load(
        r"
#####
#O  #
# @ #
#   #
#####
",
    );
    level.run(Direction::Left);
    assert_eq!(player_pos(&level), pos(1, 2));
    assert_eq!(kind_at(&level, 1, 1), Kind::Boulder);
    assert_eq!(level.outcome, Outcome::InProgress);
}

#[test]
fn boulder_falling_a_full_cell_crushes_the_player() {
    let mut level = load(
        r"
#####
#O  #
# @ #
#   #
#####
",
    );
    level.run(Direction::Left);
    let outcome = level.run(Direction::Down);
    assert_eq!(outcome, Outcome::Lost(DeathCause::Boulder));
}

#[test]
fn boulder_chain_falls_and_slides_off_the_pile() {
    let mut level = load(
        r"
#####
# O #
# O #
# @ #
#####
",
    );
    level.run(Direction::Left);
    assert_eq!(player_pos(&level), pos(1, 3));
    assert_eq!(kind_at(&level, 2, 3), Kind::Boulder);
    assert_eq!(kind_at(&level, 3, 3), Kind::Boulder);
    assert_eq!(kind_at(&level, 2, 1), Kind::Space);
    assert_eq!(kind_at(&level, 2, 2), Kind::Space);
    assert_eq!(level.outcome, Outcome::InProgress);
    level.grid.check_consistency();
}

#[test]
fn boulder_slips_off_a_deflector_and_keeps_falling() {
    let mut level = load(
        r"
######
#  O #
#  / #
#  @ #
#    #
######
",
    );
    level.run(Direction::Down);
    assert_eq!(player_pos(&level), pos(3, 4));
    assert_eq!(kind_at(&level, 3, 1), Kind::Space);
    assert_eq!(kind_at(&level, 3, 2), Kind::LeftDeflector);
    assert_eq!(kind_at(&level, 2, 4), Kind::Boulder);
}

#[test]
fn balloon_rises_into_a_vacated_cell() {
    let mut level = load(
        r"
####
#@ #
#^ #
####
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(2, 1));
    assert_eq!(kind_at(&level, 1, 1), Kind::Balloon);
    assert_eq!(kind_at(&level, 1, 2), Kind::Space);
}

#[test]
fn player_pushes_a_boulder_sideways() {
    let mut level = load(
        r"
#####
#@O #
#####
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(2, 1));
    assert_eq!(kind_at(&level, 3, 1), Kind::Boulder);
}

#[test]
fn push_fails_against_a_wall() {
    let mut level = load(
        r"
####
#@O#
####
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(1, 1));
    assert_eq!(kind_at(&level, 2, 1), Kind::Boulder);
}

#[test]
fn pushed_balloon_rises_afterwards() {
    let mut level = load(
        r"
#####
#   #
#@^ #
#####
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(2, 2));
    assert_eq!(kind_at(&level, 3, 1), Kind::Balloon);
    assert_eq!(kind_at(&level, 3, 2), Kind::Space);
}

#[test]
fn player_pushes_an_arrow_vertically() {
    let mut level = load(
        r"
####
#@ #
#< #
#  #
####
",
    );
    level.run(Direction::Down);
    assert_eq!(player_pos(&level), pos(1, 2));
    assert_eq!(kind_at(&level, 1, 3), Kind::LeftArrow);
}

#[test]
fn arrow_flies_across_open_space_and_kills_the_monster() {
    let mut level = load(
        r"
######
#    #
#M @<#
######
",
    );
    level.run(Direction::Up);
    assert_eq!(player_pos(&level), pos(3, 1));
    assert!(level.monster.is_none());
    assert_eq!(kind_at(&level, 1, 2), Kind::LeftArrow);
    assert_eq!(level.score(), 100);
}

#[test]
fn arrow_pops_a_balloon() {
    let mut level = load(
        r"
######
#    #
#^<  #
#@   #
######
",
    );
    level.run(Direction::Right);
    assert_eq!(kind_at(&level, 1, 2), Kind::LeftArrow);
    assert_eq!(kind_at(&level, 2, 2), Kind::Space);
}

#[test]
fn deflected_arrow_drops_without_momentum() {
    let mut level = load(
        r"
######
#    #
#/<  #
#@   #
#    #
######
",
    );
    level.run(Direction::Down);
    assert_eq!(player_pos(&level), pos(1, 4));
    assert_eq!(kind_at(&level, 1, 3), Kind::LeftArrow);
    let arrow = level.grid.get(pos(1, 3));
    assert!(!level.grid.entity(arrow).moving);
}

#[test]
fn monster_chases_along_the_wider_axis() {
    let mut level = load(
        r"
#######
#M  @ #
#######
",
    );
    level.run(Direction::Left);
    let monster = level.monster.unwrap();
    assert_eq!(level.grid.position(monster), Some(pos(2, 1)));
    let outcome = level.run(Direction::Here);
    assert_eq!(outcome, Outcome::Lost(DeathCause::Monster));
}

#[test]
fn monster_prefers_vertical_on_an_axis_tie() {
    let mut level = load(
        r"
#####
#M  #
#   #
#  @#
#####
",
    );
    level.run(Direction::Here);
    let monster = level.monster.unwrap();
    assert_eq!(level.grid.position(monster), Some(pos(1, 2)));
}

#[test]
fn pushed_boulder_crushes_the_monster() {
    let mut level = load(
        r"
######
#@OM #
######
",
    );
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(2, 1));
    assert!(level.monster.is_none());
    assert_eq!(kind_at(&level, 3, 1), Kind::Boulder);
    assert_eq!(level.score(), 100);
}

#[test]
fn follower_hugs_the_wall_into_the_cage() {
    let mut level = load(
        r"
########
#S    +#
########
#@     #
########
",
    );
    assert_eq!(level.babies.len(), 1);
    assert_eq!(level.treasure_remaining(), 1);
    for _ in 0..5 {
        level.run(Direction::Here);
    }
    assert!(level.babies.is_empty());
    assert_eq!(kind_at(&level, 6, 1), Kind::Treasure);
    assert_eq!(level.score(), 20);
    assert_eq!(level.outcome, Outcome::InProgress);
}

#[test]
fn walking_into_a_follower_is_fatal() {
    let mut level = load(
        r"
####
#@S#
####
",
    );
    let outcome = level.run(Direction::Right);
    assert_eq!(outcome, Outcome::Lost(DeathCause::BabyMonsters));
}

#[test]
fn follower_stepping_onto_the_player_is_fatal() {
    let mut level = load(
        r"
####
#S@#
####
",
    );
    let outcome = level.run(Direction::Here);
    assert_eq!(outcome, Outcome::Lost(DeathCause::BabyMonsters));
}

#[test]
fn followers_stack_in_a_dead_end() {
    let mut level = load(
        r"
#####
#SS##
#####
#@  #
#####
",
    );
    let first = level.babies[0];
    level.run(Direction::Here);
    assert_eq!(level.babies.len(), 2);
    assert_eq!(kind_at(&level, 1, 1), Kind::BabyMonster);
    assert_eq!(kind_at(&level, 2, 1), Kind::Space);
    assert!(level.grid.nowhere(first));
    level.run(Direction::Here);
    assert_eq!(kind_at(&level, 2, 1), Kind::BabyMonster);
    assert_eq!(kind_at(&level, 1, 1), Kind::Space);
    assert!(level.grid.nowhere(first));
    level.grid.check_consistency();
}

#[test]
fn teleport_relocates_the_player_to_the_arrival_cell() {
    let mut level = load(
        r"
##########
#@T::::A:#
##########
",
    );
    assert_eq!(kind_at(&level, 7, 1), Kind::Space);
    level.run(Direction::Right);
    assert_eq!(player_pos(&level), pos(7, 1));
    assert_eq!(kind_at(&level, 2, 1), Kind::Space);
    assert_eq!(level.score(), 20);
    level.grid.check_consistency();
}

// A reactor sits poised at each cell the jump disturbs: a boulder over the
// departure cell and a balloon under each open arrival diagonal, every rise
// capped by earth. One cascade visit per cell fires each reactor exactly
// once, so the turn journals exactly four steps: the player's hop plus one
// primitive move per reactor.
#[test]
fn teleport_cascade_wakes_each_disturbed_cell_once() {
    let mut level = load(
        r"
############
#::::::::::#
#:O:::::: :#
#@T:::::A^:#
#:::::: :::#
#::::::^:::#
############
",
    );
    level.take_events();
    level.run(Direction::Right);
    let steps = level
        .take_events()
        .iter()
        .filter(|e| matches!(e, DisplayEvent::Step))
        .count();
    assert_eq!(steps, 4);
    assert_eq!(player_pos(&level), pos(8, 3));
    assert_eq!(level.score(), 20);
    // Departure cell: the boulder fell into the space the teleport left.
    assert_eq!(kind_at(&level, 2, 3), Kind::Boulder);
    assert_eq!(kind_at(&level, 2, 2), Kind::Space);
    // Upper-right and lower-left diagonals: each balloon rose one cell.
    assert_eq!(kind_at(&level, 9, 2), Kind::Balloon);
    assert_eq!(kind_at(&level, 9, 3), Kind::Space);
    assert_eq!(kind_at(&level, 7, 4), Kind::Balloon);
    assert_eq!(kind_at(&level, 7, 5), Kind::Space);
    assert!(level.triggers.is_empty());
    level.grid.check_consistency();
}

#[test]
fn step_events_mark_each_primitive_move() {
    let mut level = load(
        r"
#####
#@O #
#####
",
    );
    level.take_events();
    level.run(Direction::Right);
    let events = level.take_events();
    let steps = events
        .iter()
        .filter(|e| matches!(e, DisplayEvent::Step))
        .count();
    assert_eq!(steps, 2);
    assert_eq!(events[2], DisplayEvent::Step);
    assert_eq!(events[5], DisplayEvent::Step);
    assert!(
        events[6..]
            .iter()
            .all(|e| matches!(e, DisplayEvent::Message { .. }))
    );
}

#[test]
fn trigger_stack_is_empty_between_turns() {
    let mut level = load(
        r"
#####
# O #
# O #
# @ #
#####
",
    );
    level.run(Direction::Left);
    assert!(level.triggers.is_empty());
    level.run(Direction::Here);
    assert!(level.triggers.is_empty());
}

#[test]
fn grid_stays_consistent_through_a_busy_level() {
    let source = crate::levels::get(2).unwrap();
    let mut level = Level::load(source).unwrap();
    let dirs = [
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Down,
        Direction::Here,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Here,
        Direction::Down,
    ];
    for dir in dirs {
        if level.outcome != Outcome::InProgress {
            break;
        }
        level.run(dir);
        level.grid.check_consistency();
    }
}

#[test]
fn map_without_a_player_is_rejected() {
    let result = Level::load(&LevelSource {
        number: 1,
        map: "####\n#  #\n####",
        metadata: r#"{"name": "test"}"#,
    });
    assert!(matches!(result, Err(LevelError::NoPlayer)));
}

#[test]
fn unknown_map_characters_become_space() {
    let level = load(
        r"
####
#@q#
####
",
    );
    assert_eq!(kind_at(&level, 2, 1), Kind::Space);
}

#[test]
fn load_emits_a_full_draw_journal() {
    let mut level = load(
        r"
####
#@ #
####
",
    );
    let draws = level
        .take_events()
        .iter()
        .filter(|e| matches!(e, DisplayEvent::Draw { .. }))
        .count();
    assert_eq!(draws, 4 * 3);
}
