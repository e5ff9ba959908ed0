#![no_main]

use category_picker::{CategoryTree, Flattener, SearchFilter, SearchQuery};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Both listing shapes should reject bad input with an error, never panic
        if let Ok(tree) = CategoryTree::from_json(content) {
            let _ = Flattener::new(&tree).flatten_tree();
        }
        if let Ok(tree) = CategoryTree::from_records_json(content) {
            let view = SearchFilter::new(&tree).apply(&SearchQuery::new("a"), false, &Default::default());
            let _ = Flattener::new(&tree).flatten_filtered(&view);
        }
    }
});
