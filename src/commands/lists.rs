//! Wishlist and guillotine command implementation

use log::warn;

use crate::fpl::{FplClient, GameData, PlayerPool};
use crate::lists::{ListKind, PlayerList};
use crate::{PlayerId, Result};

/// Apply `add` then `remove` to `list`.
pub fn edit_list(list: &mut PlayerList, add: Option<PlayerId>, remove: Option<PlayerId>) {
    if let Some(id) = add {
        if !list.add(id) {
            println!("{} already on the {}", id, list.kind());
        }
    }
    if let Some(id) = remove {
        if !list.remove(id) {
            println!("{} was not on the {}", id, list.kind());
        }
    }
}

/// Handle the list command
pub async fn handle_list(
    kind: ListKind,
    add: Option<PlayerId>,
    remove: Option<PlayerId>,
) -> Result<()> {
    let mut list = PlayerList::load_default(kind);
    edit_list(&mut list, add, remove);

    if list.is_empty() {
        println!("The {} is empty", kind);
        return Ok(());
    }

    // Names are best effort; ids still print offline.
    let data = match GameData::load(&FplClient::new()).await {
        Ok(data) => Some(data),
        Err(e) => {
            warn!("Could not load player names: {}", e);
            None
        }
    };

    println!("{} ({}):", kind, list.len());
    for id in list.ids() {
        match data.as_ref().and_then(|d| d.player(id)) {
            Some(p) => println!("  {:>4} {} ({})", id, p.web_name, p.position),
            None => println!("  {:>4}", id),
        }
    }
    Ok(())
}
