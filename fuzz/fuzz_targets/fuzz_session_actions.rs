#![no_main]

use category_picker::{
    Category, CategoryTree, PickerAction, PickerConfig, PickerSession, Presenter,
};
use libfuzzer_sys::fuzz_target;

const IDS: [&str; 6] = ["A", "B", "C", "D", "E", "ghost"];

fn tree() -> CategoryTree {
    CategoryTree::from_forest(vec![
        Category::new("A", "Apparel")
            .with_child(Category::new("B", "Shoes").with_child(Category::new("D", "Boots")))
            .with_child(Category::new("C", "Hats")),
        Category::new("E", "Electronics"),
    ])
    .unwrap_or_default()
}

fn action(op: u8, arg: u8) -> PickerAction {
    let id = IDS[usize::from(arg) % IDS.len()].into();
    match op % 12 {
        0 => PickerAction::Toggle(id),
        1 => PickerAction::SelectSubtree(id),
        2 => PickerAction::DeselectSubtree(id),
        3 => PickerAction::SelectAll,
        4 => PickerAction::ClearAll,
        5 => PickerAction::Expand(id),
        6 => PickerAction::Collapse(id),
        7 => PickerAction::ToggleExpansion(id),
        8 => PickerAction::ExpandAll,
        9 => PickerAction::CollapseAll,
        10 => PickerAction::SetQuery(["", "o", "sh", " H "][usize::from(arg) % 4].to_string()),
        _ => PickerAction::SetSelectedOnly(arg % 2 == 0),
    }
}

fuzz_target!(|data: &[u8]| {
    // Any action sequence keeps the summary consistent
    let mut session = PickerSession::new(tree(), PickerConfig::default());
    for pair in data.chunks_exact(2) {
        session.apply(action(pair[0], pair[1]));
        let summary = Presenter::for_session(&mut session).summary();
        assert!(summary.selected_count <= summary.total_count);
        assert!(summary.visible_count <= summary.total_count);
    }
});
