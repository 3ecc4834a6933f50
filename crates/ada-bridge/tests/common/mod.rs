#![allow(dead_code)]

use std::{
    collections::{BTreeMap, BTreeSet},
    future::Future,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use ada_bridge::{AnalysisChannel, ChannelError, DocumentRegistry, ReferenceElement, Vfs};
use tower_lsp::lsp_types::{Location, Position, Range, Url};

pub fn workspace_uri(name: &str) -> Url {
    Url::parse(&format!("file:///workspace/{name}")).expect("workspace URI is valid")
}

/// Registry with in-memory documents under `/workspace`.
pub fn workspace(files: &[(&str, &str)]) -> Vfs {
    let vfs = Vfs::new();
    for (name, text) in files {
        vfs.open(workspace_uri(name), text.to_string(), 1);
    }
    vfs
}

pub fn reference_at(
    vfs: &Vfs,
    uri: &Url,
    offset: usize,
) -> ReferenceElement {
    let file = vfs.find_file_by_url(uri).expect("file is registered");
    let tree = vfs.tree(&file).expect("file has a tree");
    ReferenceElement::at(&tree, &file, offset).expect("identifier at offset")
}

pub fn offset_of(
    source: &str,
    needle: &str,
) -> usize {
    offset_of_nth(source, needle, 0)
}

pub fn offset_of_nth(
    source: &str,
    needle: &str,
    nth: usize,
) -> usize {
    assert!(!needle.is_empty(), "needle must not be empty");
    source.match_indices(needle).nth(nth).map(|(offset, _)| offset).unwrap_or_else(|| panic!("needle not found: {needle}"))
}

pub fn position_of(
    source: &str,
    needle: &str,
) -> Position {
    position_of_nth(source, needle, 0)
}

pub fn position_of_nth(
    source: &str,
    needle: &str,
    nth: usize,
) -> Position {
    let before = &source[..offset_of_nth(source, needle, nth)];
    let line = before.as_bytes().iter().filter(|&&b| b == b'\n').count() as u32;
    let tail = before.rsplit_once('\n').map(|(_, tail)| tail).unwrap_or(before);
    Position::new(line, tail.encode_utf16().count() as u32)
}

pub fn location(
    uri: Url,
    start: Position,
) -> Location {
    Location::new(uri, Range::new(start, start))
}

/// In-process analysis service answering from a table.
///
/// Unscripted positions answer "no definition".
#[derive(Default)]
pub struct ScriptedChannel {
    answers: Mutex<BTreeMap<(Url, Position), Location>>,
    failures: Mutex<BTreeSet<(Url, Position)>>,
    delay: Mutex<Option<Duration>>,
    calls: AtomicUsize,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(
        &self,
        uri: &Url,
        position: Position,
        target: Location,
    ) {
        self.answers.lock().unwrap().insert((uri.clone(), position), target);
    }

    pub fn fail(
        &self,
        uri: &Url,
        position: Position,
    ) {
        self.failures.lock().unwrap().insert((uri.clone(), position));
    }

    pub fn set_delay(
        &self,
        delay: Option<Duration>,
    ) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalysisChannel for ScriptedChannel {
    fn definition(
        &self,
        uri: &Url,
        position: Position,
    ) -> impl Future<Output = Result<Option<Location>, ChannelError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (uri.clone(), position);
        let failed = self.failures.lock().unwrap().contains(&key);
        let answer = self.answers.lock().unwrap().get(&key).cloned();
        let delay = *self.delay.lock().unwrap();
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if failed {
                return Err(ChannelError::Protocol("scripted failure".to_string()));
            }
            Ok(answer)
        }
    }
}
