use std::{cell::Cell, rc::Rc};

use framemenu::{
    menu::NumberKind,
    recorder::{RecordingRenderer, RecordingSound},
    ItemKind, Menu, MenuStyle, Signal,
};

#[test]
fn settings_scenario() {
    let sound = RecordingSound::default();
    let debug = Rc::new(Cell::new(false));
    let volume = Rc::new(Cell::new(5));
    let child = Menu::new("More").into_ref();

    let mut menu = Menu::new("Settings");
    menu.add_separator("General");
    menu.add_toggle("Debug", debug.clone());
    menu.add_int("Volume", volume.clone(), 0, 10, 1);
    menu.add_submenu("More", child.clone());

    menu.open();
    assert_eq!(menu.selected(), 1);
    assert_eq!(menu.current_kind(), ItemKind::Toggle);

    menu.down(&sound);
    assert_eq!(menu.selected(), 2);

    menu.right(&sound);
    menu.right(&sound);
    menu.right(&sound);
    assert_eq!(volume.get(), 8);

    menu.down(&sound);
    assert_eq!(menu.selected(), 3);
    assert!(Rc::ptr_eq(
        &menu.current_submenu().expect("submenu row"),
        &child
    ));

    assert!(!child.borrow().is_opening());
    let returned = menu.select(&sound).expect("child returned");
    assert!(Rc::ptr_eq(&returned, &child));
    assert!(child.borrow().is_opening());
    assert_eq!(menu.selected(), 3);
    assert_eq!(
        sound.signals(),
        vec![
            Signal::Navigate,
            Signal::Adjust,
            Signal::Adjust,
            Signal::Adjust,
            Signal::Navigate,
            Signal::Select
        ]
    );
}

#[test]
fn small_window_scenario() {
    let sound = RecordingSound::default();
    let mut menu = Menu::with_style("Five", MenuStyle::default(), 2);
    for i in 0..5 {
        menu.add_action(format!("Option {i}"), || {});
    }
    assert_eq!((menu.selected(), menu.scroll()), (0, 0));

    for _ in 0..4 {
        menu.down(&sound);
    }
    assert_eq!(menu.selected(), 4);
    assert_eq!(menu.scroll(), 3);
}

#[test]
fn right_stabilizes_at_max() {
    let sound = RecordingSound::default();
    let value = Rc::new(Cell::new(0.0f32));
    let mut menu = Menu::new("Float");
    menu.add_float("Blend", value.clone(), -1.0, 1.0, 0.3);
    menu.open();
    assert_eq!(menu.current_kind(), ItemKind::Number(NumberKind::Float));

    let mut previous = value.get();
    for _ in 0..20 {
        menu.right(&sound);
        assert!(value.get() >= previous);
        assert!((-1.0..=1.0).contains(&value.get()));
        previous = value.get();
    }
    assert_eq!(value.get(), 1.0);

    let before = sound.signals().len();
    menu.right(&sound);
    assert_eq!(sound.signals().len(), before);
}

#[test]
fn folders_share_children_with_the_caller() {
    let sound = RecordingSound::default();
    let mut root = Menu::new("Root");
    let folder = root.add_folder("Empty folder");
    folder.borrow_mut().add_action("Late addition", || {});

    root.open();
    let opened = root.select(&sound).expect("folder");
    assert!(Rc::ptr_eq(&opened, &folder));
    assert_eq!(opened.borrow().len(), 1);
    assert_eq!(Rc::strong_count(&folder), 3);

    drop(root);
    assert_eq!(Rc::strong_count(&folder), 2);
}

#[test]
fn rendering_never_changes_state() {
    let sound = RecordingSound::default();
    let mut menu = Menu::with_style("Render", MenuStyle::default(), 3);
    menu.add_separator("Top");
    for i in 0..8 {
        menu.add_action(format!("row {i}"), || {});
    }
    menu.open();
    menu.down(&sound);
    menu.down(&sound);
    menu.down(&sound);

    let before = (menu.selected(), menu.scroll(), menu.is_opening());
    let mut first = RecordingRenderer::default();
    menu.render(&mut first);
    let mut second = RecordingRenderer::default();
    menu.render(&mut second);

    assert_eq!(before, (menu.selected(), menu.scroll(), menu.is_opening()));
    assert_eq!(first.calls(), second.calls());
}
