//! Native file picker, for runs without a FILE argument.

use std::path::PathBuf;

pub fn pick_mod_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select .mod file")
        .add_filter("MOD files", &["mod", "MOD"])
        .add_filter("All files", &["*"])
        .pick_file()
}
