use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &ShelfPaths) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized shelf at {}",
        dir.display()
    )));
    Ok(result)
}
