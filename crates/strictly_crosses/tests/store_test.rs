//! Tests for the durable file-backed store.

use strictly_crosses::{
    BoardView, DEFAULT_KEY, FileStore, Game, GameState, KeyValueStore, Player, Position,
    StateStore, Step,
};

#[test]
fn test_file_store_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = StateStore::new(FileStore::open(dir.path()).unwrap());
        let mut game = Game::open(store).unwrap();
        game.select(Position::Center).unwrap();
        game.select(Position::TopLeft).unwrap();
        game.undo().unwrap();
    }

    let store = StateStore::new(FileStore::open(dir.path()).unwrap());
    let game = Game::open(store).unwrap();
    let state = game.state().unwrap();
    assert_eq!(state.steps(), &[Step::new(Position::Center, Player::Cross)]);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_file_store_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(FileStore::open(dir.path()).unwrap());
    let mut game = Game::open(store).unwrap();
    game.select(Position::TopRight).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("AppState.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["steps"][0]["idx"], 2);
    assert_eq!(value["steps"][0]["player"], "cross");
    assert_eq!(value["history"].as_array().unwrap().len(), 1);
}

#[test]
fn test_restart_clears_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = FileStore::open(dir.path()).unwrap();
    backend
        .set(DEFAULT_KEY, r#"{"steps":[],"history":[],"extra":1}"#.to_string())
        .unwrap();

    let mut game = Game::open(StateStore::new(backend)).unwrap();
    game.select(Position::Center).unwrap();
    game.restart().unwrap();

    let raw = std::fs::read_to_string(dir.path().join("AppState.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("extra").is_none());
    assert_eq!(value["steps"].as_array().unwrap().len(), 0);
}

#[test]
fn test_restart_after_file_corrupted_mid_game() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(FileStore::open(dir.path()).unwrap());
    let mut game = Game::open(store).unwrap();
    game.select(Position::Center).unwrap();

    std::fs::write(dir.path().join("AppState.json"), "garbage").unwrap();
    assert!(game.undo().is_err());

    let view = game.restart().unwrap();
    assert_eq!(view, BoardView::default());
    assert_eq!(game.state().unwrap(), GameState::default());
}

#[test]
fn test_failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("AppState.json")).unwrap();
    std::fs::write(dir.path().join("AppState.json").join("child"), "x").unwrap();

    let mut backend = FileStore::open(dir.path()).unwrap();
    assert!(backend.set(DEFAULT_KEY, "{}".to_string()).is_err());
    assert!(!dir.path().join("AppState.json.tmp").exists());
}

#[test]
fn test_custom_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::with_key(FileStore::open(dir.path()).unwrap(), "second_board");
    Game::open(store).unwrap();
    assert!(dir.path().join("second_board.json").exists());
    assert!(!dir.path().join("AppState.json").exists());
}
