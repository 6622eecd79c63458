use ninekey::{
    BlockSlot, CaseMode, Changes, Engine, Family, Mode,
    grid::Direction::{self, *},
};

fn press(eng: &mut Engine, dirs: &[Direction]) -> Changes {
    dirs.iter()
        .fold(Changes::empty(), |acc, dir| acc | eng.handle(*dir))
}

#[test]
fn fresh_engine_is_at_top_level() {
    let eng = Engine::new();
    let snap = eng.snapshot();
    assert_eq!(snap.text, "");
    assert_eq!(snap.case, CaseMode::Lower);
    assert_eq!(snap.family, Family::Main);
    assert_eq!(snap.mode, Mode::TopLevel);
    assert!(snap.active_block.is_none());
}

#[test]
fn two_step_character_entry() {
    let mut eng = Engine::new();

    assert_eq!(eng.handle(Up), Changes::MODE);
    assert_eq!(
        eng.mode(),
        Mode::BlockSelected {
            family: Family::Main,
            slot: BlockSlot::Up
        }
    );
    assert_eq!(eng.handle(UpperLeft), Changes::TEXT | Changes::MODE);
    assert_eq!(eng.text(), "1");
    assert_eq!(eng.mode(), Mode::TopLevel);

    press(&mut eng, &[Up, Center]);
    assert_eq!(eng.text(), "15");
}

#[test]
fn every_cell_of_every_block_is_reachable() {
    let expected = [
        (Up, "123456789"),
        (Left, "0abcdefgh"),
        (Right, "ijklmnopq"),
        (Bottom, "rstuvwxyz"),
    ];
    for (block, chars) in expected {
        let mut eng = Engine::new();
        for cell in Direction::ALL {
            press(&mut eng, &[block, cell]);
        }
        assert_eq!(eng.text(), chars, "block {block}");
    }
}

#[test]
fn alt_family_blocks() {
    let mut eng = Engine::new();
    assert_eq!(eng.handle(BottomRight), Changes::FAMILY);
    assert_eq!(eng.family(), Family::Alt);

    press(&mut eng, &[Up, UpperLeft]);
    press(&mut eng, &[Left, Up]);
    press(&mut eng, &[Right, Up]);
    press(&mut eng, &[Bottom, Up]);
    assert_eq!(eng.text(), "!ù\\\"");
    // The family is sticky.
    assert_eq!(eng.family(), Family::Alt);
}

#[test]
fn space_appends_at_top_level() {
    let mut eng = Engine::with_text("ab");
    assert_eq!(eng.handle(UpperRight), Changes::TEXT);
    assert_eq!(eng.text(), "ab ");
}

#[test]
fn erase_removes_one_trailing_character() {
    let mut eng = Engine::with_text("42");
    assert_eq!(eng.handle(UpperLeft), Changes::TEXT);
    assert_eq!(eng.text(), "4");
    assert_eq!(eng.handle(UpperLeft), Changes::TEXT);
    assert_eq!(eng.text(), "");
}

#[test]
fn erase_on_empty_text_reports_no_change() {
    let mut eng = Engine::new();
    let changes = eng.handle(UpperLeft);
    assert!(changes.is_empty());
    assert!(!changes.text_changed());
    assert_eq!(eng.text(), "");
}

#[test]
fn erase_removes_whole_grapheme() {
    let mut eng = Engine::with_text("cafe\u{301}");
    eng.handle(UpperLeft);
    assert_eq!(eng.text(), "caf");

    let mut eng = Engine::with_text("né");
    eng.handle(UpperLeft);
    assert_eq!(eng.text(), "n");
}

#[test]
fn center_at_top_level_submits_without_mutation() {
    let mut eng = Engine::with_text("42");
    let changes = eng.handle(Center);
    assert_eq!(changes, Changes::SUBMIT);
    assert!(changes.submitted());
    assert_eq!(eng.text(), "42");
    assert_eq!(eng.mode(), Mode::TopLevel);
}

#[test]
fn upper_case_is_sticky_and_skips_non_letters() {
    let mut eng = Engine::new();
    assert_eq!(eng.handle(BottomLeft), Changes::CASE);
    assert_eq!(eng.case(), CaseMode::Upper);

    press(&mut eng, &[Up, UpperLeft]); // "1"
    press(&mut eng, &[Left, Up]); // "a"
    press(&mut eng, &[Bottom, BottomRight]); // "z"
    assert_eq!(eng.text(), "1AZ");
    assert_eq!(eng.case(), CaseMode::Upper);

    eng.handle(BottomRight);
    press(&mut eng, &[Left, Right]); // "à"
    assert_eq!(eng.text(), "1AZÀ");
}

#[test]
fn toggling_twice_restores_modes_without_text_effects() {
    let mut eng = Engine::with_text("x");
    press(&mut eng, &[BottomLeft, BottomLeft, BottomRight, BottomRight]);
    assert_eq!(eng.case(), CaseMode::Lower);
    assert_eq!(eng.family(), Family::Main);
    assert_eq!(eng.text(), "x");
}

#[test]
fn corners_and_center_are_characters_inside_a_block() {
    let mut eng = Engine::new();
    // BottomLeft and BottomRight select characters instead of toggling.
    press(&mut eng, &[Right, BottomLeft]);
    press(&mut eng, &[Right, BottomRight]);
    // UpperLeft selects instead of erasing; Center selects instead of submitting.
    let changes = press(&mut eng, &[Right, UpperLeft]);
    assert!(!changes.submitted());
    let changes = press(&mut eng, &[Right, Center]);
    assert!(!changes.submitted());

    assert_eq!(eng.text(), "oqim");
    assert_eq!(eng.case(), CaseMode::Lower);
    assert_eq!(eng.family(), Family::Main);
}

#[test]
fn open_block_is_frozen_to_its_family() {
    let mut eng = Engine::new();
    eng.handle(Bottom);
    // Inside a block BottomRight is the "z" cell, never a family toggle.
    eng.handle(BottomRight);
    assert_eq!(eng.text(), "z");
    assert_eq!(eng.family(), Family::Main);

    eng.handle(BottomRight);
    eng.handle(Bottom);
    let snap = eng.snapshot();
    assert_eq!(
        snap.mode,
        Mode::BlockSelected {
            family: Family::Alt,
            slot: BlockSlot::Bottom
        }
    );
    assert_eq!(snap.active_block.map(|b| b.get(Center)), Some("'"));
}

#[test]
fn snapshot_exposes_top_level_blocks_of_current_family() {
    let mut eng = Engine::new();
    assert_eq!(eng.snapshot().block(BlockSlot::Left).get(UpperLeft), "0");
    eng.handle(BottomRight);
    assert_eq!(eng.snapshot().block(BlockSlot::Left).get(UpperLeft), "`");
}
