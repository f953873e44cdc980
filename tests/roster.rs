//! Integration tests for roster import, level parsing and skill bracket conversion.

use shuttle_club::{
    import_roster_csv, Level, LevelError, MajorLevel, PlayerStatus, RosterError, Session,
    SkillBracket,
};

#[test]
fn imports_rows_with_optional_games() {
    let csv = "name,level,games_played\nAlice, b ,3\nBob,D,\nCharlie,A\n";
    let players = import_roster_csv(csv.as_bytes()).unwrap();
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].name, "Alice");
    assert_eq!(players[0].level, Level::B);
    assert_eq!(players[0].games_played, 3);
    assert_eq!(players[1].games_played, 0);
    assert_eq!(players[2].level, Level::A);
    assert!(players.iter().all(|p| p.eligible && p.status == PlayerStatus::Available));
}

#[test]
fn unknown_level_reports_line() {
    let csv = "name,level\nAlice,B\nBob,E\n";
    match import_roster_csv(csv.as_bytes()) {
        Err(RosterError::Level { line, source }) => {
            assert_eq!(line, 3);
            assert_eq!(source, LevelError::UnknownLevel("E".to_string()));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn empty_name_reports_line() {
    let csv = "name,level\n ,B\n";
    assert!(matches!(
        import_roster_csv(csv.as_bytes()),
        Err(RosterError::EmptyName { line: 2 })
    ));
}

#[test]
fn session_import_skips_existing_names() {
    let mut s = Session::new("Friday");
    s.add_player("Alice", Level::C).unwrap();
    let players = import_roster_csv("name,level\nALICE,B\nBob,B\n".as_bytes()).unwrap();
    assert_eq!(s.import_players(players), 1);
    assert_eq!(s.players.len(), 2);
    assert_eq!(s.players[0].level, Level::C);
}

#[test]
fn level_parsing() {
    assert_eq!("c".parse::<Level>(), Ok(Level::C));
    assert_eq!(" D ".parse::<Level>(), Ok(Level::D));
    assert!("X".parse::<Level>().is_err());
    assert!(Level::A < Level::D);
    assert!(Level::A.excludes(Level::D));
    assert!(!Level::B.excludes(Level::C));
}

#[test]
fn skill_bracket_maps_major_to_tier() {
    let b = SkillBracket::new(MajorLevel::Advanced, 2).unwrap();
    assert_eq!(b.numeric(), 8);
    assert_eq!(Level::from(b), Level::C);
    assert_eq!(SkillBracket::new(MajorLevel::Beginner, 1).unwrap().numeric(), 1);
    assert_eq!(SkillBracket::new(MajorLevel::Expert, 3).unwrap().numeric(), 12);
    assert_eq!(
        SkillBracket::new(MajorLevel::Expert, 4),
        Err(LevelError::InvalidSubLevel(4))
    );
}
