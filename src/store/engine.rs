//! StyleStore: the in-memory style engine.
//!
//! Instances and tokens live in slotmap arenas. The store keeps the snapshot
//! of the selected instance behind an `Rc` and replaces it wholesale after
//! every accepted commit, then notifies listeners once with the new snapshot.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::store::config::StoreConfig;
use crate::store::history::{Commit, History};
use crate::store::instance::{apply_to, Declarations, Instance, InstanceId, Token, TokenId};
use crate::style::{StyleInfo, StyleProperty, StyleValue};
use crate::update::{EngineError, StyleEngine, StyleUpdate};

new_key_type! {
    /// Handle returned by [`StyleStore::subscribe`].
    pub struct ListenerId;
}

type Listener = Box<dyn FnMut(&Rc<StyleInfo>)>;

struct StoreState {
    config: StoreConfig,
    instances: SlotMap<InstanceId, Instance>,
    tokens: SlotMap<TokenId, Token>,
    selected: Option<InstanceId>,
    snapshot: Rc<StyleInfo>,
    history: History,
    revision: u64,
}

impl StoreState {
    /// Recompute the selected instance's snapshot and make it current.
    fn refresh(&mut self) -> Rc<StyleInfo> {
        let info = match self.selected.and_then(|id| self.instances.get(id)) {
            Some(instance) => instance.resolve(|id| self.tokens.get(id)),
            None => StyleInfo::new(),
        };
        self.snapshot = Rc::new(info);
        self.revision += 1;
        Rc::clone(&self.snapshot)
    }

    fn validate(&self, updates: &[StyleUpdate]) -> Result<(), EngineError> {
        if !self.config.reject_invalid {
            return Ok(());
        }
        for update in updates {
            if let StyleUpdate::Set { property, value } = update {
                if value.is_invalid() {
                    return Err(EngineError::InvalidValue {
                        property: *property,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn instance_mut(&mut self, id: InstanceId) -> Result<&mut Instance, EngineError> {
        self.instances.get_mut(id).ok_or(EngineError::UnknownInstance)
    }
}

/// Single-threaded in-memory [`StyleEngine`].
///
/// Each instance's snapshot layers preset declarations, applied tokens and
/// local overrides; batches only ever write the local layer of the selected
/// instance.
pub struct StyleStore {
    state: RefCell<StoreState>,
    listeners: RefCell<SlotMap<ListenerId, Option<Listener>>>,
    /// Snapshots waiting for delivery, oldest first.
    pending: RefCell<VecDeque<Rc<StyleInfo>>>,
    delivering: Cell<bool>,
}

impl Default for StyleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleStore {
    /// Create an empty store with the default config.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store.
    pub fn with_config(config: StoreConfig) -> Self {
        let history = History::new(config.history_limit);
        Self {
            state: RefCell::new(StoreState {
                config,
                instances: SlotMap::with_key(),
                tokens: SlotMap::with_key(),
                selected: None,
                snapshot: Rc::new(StyleInfo::new()),
                history,
                revision: 0,
            }),
            listeners: RefCell::new(SlotMap::with_key()),
            pending: RefCell::new(VecDeque::new()),
            delivering: Cell::new(false),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.state.borrow().config.clone()
    }

    /// Incremented every time a new snapshot becomes current.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    // -- instances ------------------------------------------------------

    /// Add an instance with no declarations.
    pub fn add_instance(&self) -> InstanceId {
        self.state.borrow_mut().instances.insert(Instance::default())
    }

    /// Remove an instance; deselects it if it was selected.
    pub fn remove_instance(&self, id: InstanceId) -> Result<(), EngineError> {
        self.mutate(|state| {
            state.instances.remove(id).ok_or(EngineError::UnknownInstance)?;
            if state.selected == Some(id) {
                state.selected = None;
            }
            Ok(())
        })
    }

    /// Replace the preset (component default) declarations of an instance.
    pub fn set_preset<I>(&self, id: InstanceId, declarations: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = (StyleProperty, StyleValue)>,
    {
        let declarations: Declarations = declarations.into_iter().collect();
        self.mutate(|state| {
            state.instance_mut(id)?.preset = declarations;
            Ok(())
        })
    }

    /// Make `id` the selected instance whose snapshot is current.
    pub fn select(&self, id: InstanceId) -> Result<(), EngineError> {
        self.mutate(|state| {
            if !state.instances.contains_key(id) {
                return Err(EngineError::UnknownInstance);
            }
            state.selected = Some(id);
            Ok(())
        })
    }

    /// Clear the selection; the current snapshot becomes empty.
    pub fn deselect(&self) {
        // Cannot fail: the closure never returns an error.
        let _ = self.mutate(|state| {
            state.selected = None;
            Ok(())
        });
    }

    pub fn selected(&self) -> Option<InstanceId> {
        self.state.borrow().selected
    }

    /// The local overrides of an instance, selected or not.
    pub fn local_declarations(&self, id: InstanceId) -> Option<Declarations> {
        self.state
            .borrow()
            .instances
            .get(id)
            .map(|instance| instance.local.clone())
    }

    // -- tokens ---------------------------------------------------------

    /// Define a reusable token.
    pub fn define_token<I>(&self, name: impl Into<String>, declarations: I) -> TokenId
    where
        I: IntoIterator<Item = (StyleProperty, StyleValue)>,
    {
        let token = Token {
            name: name.into(),
            declarations: declarations.into_iter().collect(),
        };
        self.state.borrow_mut().tokens.insert(token)
    }

    /// Replace a token's declarations; every instance using it sees the change.
    pub fn update_token<I>(&self, id: TokenId, declarations: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = (StyleProperty, StyleValue)>,
    {
        let declarations: Declarations = declarations.into_iter().collect();
        self.mutate(|state| {
            let token = state.tokens.get_mut(id).ok_or(EngineError::UnknownToken)?;
            token.declarations = declarations;
            Ok(())
        })
    }

    pub fn token_name(&self, id: TokenId) -> Option<String> {
        self.state.borrow().tokens.get(id).map(|t| t.name.clone())
    }

    /// Apply `token` to `instance` on top of previously applied tokens.
    pub fn apply_token(&self, instance: InstanceId, token: TokenId) -> Result<(), EngineError> {
        self.mutate(|state| {
            if !state.tokens.contains_key(token) {
                return Err(EngineError::UnknownToken);
            }
            let tokens = &mut state.instance_mut(instance)?.tokens;
            if !tokens.contains(&token) {
                tokens.push(token);
            }
            Ok(())
        })
    }

    /// Detach `token` from `instance`.
    pub fn detach_token(&self, instance: InstanceId, token: TokenId) -> Result<(), EngineError> {
        self.mutate(|state| {
            state.instance_mut(instance)?.tokens.retain(|t| *t != token);
            Ok(())
        })
    }

    // -- history --------------------------------------------------------

    /// Revert the most recent commit. Returns `false` when there is nothing to undo.
    pub fn undo(&self) -> bool {
        self.replay(|history| history.undo().map(|c| (c.instance, c.inverse)))
    }

    /// Re-apply the most recently undone commit.
    pub fn redo(&self) -> bool {
        self.replay(|history| history.redo().map(|c| (c.instance, c.forward)))
    }

    pub fn can_undo(&self) -> bool {
        self.state.borrow().history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.borrow().history.can_redo()
    }

    fn replay(
        &self,
        step: impl FnOnce(&mut History) -> Option<(InstanceId, Vec<StyleUpdate>)>,
    ) -> bool {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let Some((id, updates)) = step(&mut state.history) else {
                return false;
            };
            // The instance may have been removed since the commit.
            let Some(instance) = state.instances.get_mut(id) else {
                return false;
            };
            apply_to(&mut instance.local, &updates);
            state.refresh()
        };
        self.notify(&snapshot);
        true
    }

    // -- listeners ------------------------------------------------------

    /// Call `listener` with every new snapshot.
    pub fn subscribe(&self, listener: impl FnMut(&Rc<StyleInfo>) + 'static) -> ListenerId {
        self.listeners.borrow_mut().insert(Some(Box::new(listener)))
    }

    /// Stop notifying a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id).is_some()
    }

    // -- internal helpers -----------------------------------------------

    /// Run a structural change, then publish the recomputed snapshot.
    fn mutate(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<(), EngineError>,
    ) -> Result<(), EngineError> {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state)?;
            state.refresh()
        };
        self.notify(&snapshot);
        Ok(())
    }

    /// Deliver `snapshot` to every listener.
    ///
    /// Each callback is taken out of its slot while it runs, so listeners may
    /// read the store, subscribe, or unsubscribe themselves. A commit made by
    /// a listener is queued behind the snapshot being delivered; every
    /// listener sees snapshots in commit order and ends on the current one.
    fn notify(&self, snapshot: &Rc<StyleInfo>) {
        self.pending.borrow_mut().push_back(Rc::clone(snapshot));
        if self.delivering.replace(true) {
            return;
        }
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(snapshot) = next else {
                break;
            };
            self.deliver(&snapshot);
        }
        self.delivering.set(false);
    }

    fn deliver(&self, snapshot: &Rc<StyleInfo>) {
        let ids: Vec<ListenerId> = self.listeners.borrow().keys().collect();
        for id in ids {
            let callback = self
                .listeners
                .borrow_mut()
                .get_mut(id)
                .and_then(Option::take);
            let Some(mut callback) = callback else {
                continue;
            };
            callback(snapshot);
            if let Some(slot) = self.listeners.borrow_mut().get_mut(id) {
                *slot = Some(callback);
            }
        }
    }
}

impl StyleEngine for StyleStore {
    fn current_style(&self) -> Rc<StyleInfo> {
        Rc::clone(&self.state.borrow().snapshot)
    }

    fn apply_updates(&self, updates: &[StyleUpdate]) -> Result<(), EngineError> {
        if updates.is_empty() {
            return Ok(());
        }
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let id = state.selected.ok_or(EngineError::NoSelection)?;
            if let Err(error) = state.validate(updates) {
                tracing::warn!(%error, operations = updates.len(), "style batch rejected");
                return Err(error);
            }
            let inverse = apply_to(&mut state.instance_mut(id)?.local, updates);
            state.history.push(Commit {
                instance: id,
                forward: updates.to_vec(),
                inverse,
            });
            state.refresh()
        };
        tracing::debug!(operations = updates.len(), "style batch committed");
        self.notify(&snapshot);
        Ok(())
    }
}

impl fmt::Debug for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("StyleStore")
            .field("instances", &state.instances.len())
            .field("tokens", &state.tokens.len())
            .field("selected", &state.selected)
            .field("revision", &state.revision)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSource;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use StyleProperty::*;

    fn selected_store() -> (StyleStore, InstanceId) {
        let store = StyleStore::new();
        let id = store.add_instance();
        store.select(id).unwrap();
        (store, id)
    }

    #[test]
    fn no_selection_refuses_writes() {
        let store = StyleStore::new();
        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(1.0));
        assert_eq!(batch.publish(), Err(EngineError::NoSelection));
    }

    #[test]
    fn commit_writes_local_layer() {
        let (store, id) = selected_store();
        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(10.0));
        batch.publish().unwrap();

        let style = store.current_style();
        assert_eq!(style.value(Width), Some(&StyleValue::px(10.0)));
        assert_eq!(style.source(Width), StyleSource::Local);
        assert_eq!(
            store.local_declarations(id).unwrap().get(&Width),
            Some(&StyleValue::px(10.0))
        );
    }

    #[test]
    fn delete_reveals_lower_layers() {
        let (store, id) = selected_store();
        store.set_preset(id, [(Width, StyleValue::keyword("auto"))]).unwrap();
        let token = store.define_token("Card", [(Width, StyleValue::px(300.0))]);
        store.apply_token(id, token).unwrap();
        assert_eq!(store.current_style().source(Width), StyleSource::Remote);

        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(10.0));
        batch.publish().unwrap();
        assert_eq!(store.current_style().source(Width), StyleSource::Local);

        let mut batch = store.batch();
        batch.delete_property(Width);
        batch.publish().unwrap();
        assert_eq!(store.current_style().source(Width), StyleSource::Remote);
        assert_eq!(store.current_style().value(Width), Some(&StyleValue::px(300.0)));

        store.detach_token(id, token).unwrap();
        assert_eq!(store.current_style().source(Width), StyleSource::Preset);
        assert_eq!(store.token_name(token).as_deref(), Some("Card"));
    }

    #[test]
    fn invalid_value_rejects_whole_batch() {
        let (store, _) = selected_store();
        let before = store.current_style();
        let revision = store.revision();

        let mut batch = store.batch();
        batch
            .set_property(Width, StyleValue::px(10.0))
            .set_property(Height, StyleValue::Invalid("tall".into()));
        assert_eq!(
            batch.publish(),
            Err(EngineError::InvalidValue { property: Height, value: "tall".into() })
        );
        assert_eq!(store.current_style(), before);
        assert_eq!(store.revision(), revision);
        assert!(!store.can_undo());
    }

    #[test]
    fn invalid_values_pass_when_not_rejected() {
        let store = StyleStore::with_config(StoreConfig::new().with_reject_invalid(false));
        let id = store.add_instance();
        store.select(id).unwrap();
        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::Invalid("wide".into()));
        batch.publish().unwrap();
        assert!(store.current_style().value(Width).unwrap().is_invalid());
    }

    #[test]
    fn listeners_see_one_snapshot_per_commit() {
        let (store, _) = selected_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_c = seen.clone();
        store.subscribe(move |style| {
            seen_c
                .borrow_mut()
                .push((style.value(OverflowX).cloned(), style.value(OverflowY).cloned()));
        });

        let mut batch = store.batch();
        batch
            .set_property(OverflowX, StyleValue::keyword("hidden"))
            .set_property(OverflowY, StyleValue::keyword("hidden"));
        batch.publish().unwrap();

        let hidden = Some(StyleValue::keyword("hidden"));
        assert_eq!(*seen.borrow(), vec![(hidden.clone(), hidden)]);
    }

    #[test]
    fn listener_can_read_store_and_unsubscribe() {
        let (store, _) = selected_store();
        let store = Rc::new(store);
        let calls = Rc::new(Cell::new(0));
        let calls_c = calls.clone();
        let weak = Rc::downgrade(&store);
        let id = Rc::new(Cell::new(None));
        let id_c = id.clone();
        let listener = store.subscribe(move |style| {
            calls_c.set(calls_c.get() + 1);
            let store = weak.upgrade().unwrap();
            assert_eq!(&store.current_style(), style);
            if let Some(me) = id_c.get() {
                store.unsubscribe(me);
            }
        });
        id.set(Some(listener));

        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(1.0));
        batch.publish().unwrap();
        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(2.0));
        batch.publish().unwrap();

        assert_eq!(calls.get(), 1);
        assert!(!store.unsubscribe(listener));
    }

    #[test]
    fn commit_from_listener_is_delivered_in_order() {
        let (store, _) = selected_store();
        let store = Rc::new(store);

        let weak = Rc::downgrade(&store);
        store.subscribe(move |style| {
            if style.value(Width) == Some(&StyleValue::px(1.0)) {
                let store = weak.upgrade().unwrap();
                let mut batch = store.batch();
                batch.set_property(Width, StyleValue::px(2.0));
                batch.publish().unwrap();
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |style| sink.borrow_mut().push(style.value(Width).cloned()));

        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(1.0));
        batch.publish().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![Some(StyleValue::px(1.0)), Some(StyleValue::px(2.0))]
        );
        assert_eq!(
            store.current_style().value(Width),
            Some(&StyleValue::px(2.0))
        );
    }

    #[test]
    fn undo_and_redo_whole_commits() {
        let (store, _) = selected_store();
        let mut batch = store.batch();
        batch
            .set_property(OverflowX, StyleValue::keyword("scroll"))
            .set_property(OverflowY, StyleValue::keyword("scroll"));
        batch.publish().unwrap();

        assert!(store.undo());
        assert!(store.current_style().is_empty());
        assert!(!store.undo());

        assert!(store.redo());
        let style = store.current_style();
        assert_eq!(style.value(OverflowX), Some(&StyleValue::keyword("scroll")));
        assert_eq!(style.value(OverflowY), Some(&StyleValue::keyword("scroll")));
        assert!(!store.can_redo());
    }

    #[test]
    fn undo_restores_overwritten_values() {
        let (store, _) = selected_store();
        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(1.0));
        batch.publish().unwrap();
        let mut batch = store.batch();
        batch.set_property(Width, StyleValue::px(2.0)).delete_property(Height);
        batch.publish().unwrap();

        store.undo();
        assert_eq!(store.current_style().value(Width), Some(&StyleValue::px(1.0)));
    }

    #[test]
    fn selection_changes_snapshot() {
        let store = StyleStore::new();
        let a = store.add_instance();
        let b = store.add_instance();
        store.set_preset(a, [(Color, StyleValue::keyword("red"))]).unwrap();

        store.select(a).unwrap();
        assert_eq!(store.current_style().source(Color), StyleSource::Preset);
        store.select(b).unwrap();
        assert!(store.current_style().is_empty());
        store.deselect();
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn unknown_handles() {
        let store = StyleStore::new();
        let id = store.add_instance();
        store.remove_instance(id).unwrap();
        assert_eq!(store.select(id), Err(EngineError::UnknownInstance));
        assert_eq!(store.remove_instance(id), Err(EngineError::UnknownInstance));

        let other = store.add_instance();
        let token = store.define_token("T", Vec::<(StyleProperty, StyleValue)>::new());
        store.apply_token(other, token).unwrap();
        assert_eq!(
            store.update_token(token, [(Width, StyleValue::px(5.0))]),
            Ok(())
        );
    }

    #[test]
    fn removing_selected_instance_deselects() {
        let (store, id) = selected_store();
        store.remove_instance(id).unwrap();
        assert_eq!(store.selected(), None);
        assert!(store.current_style().is_empty());
    }

    #[test]
    fn updating_token_refreshes_users() {
        let (store, id) = selected_store();
        let token = store.define_token("Body", [(FontSize, StyleValue::px(16.0))]);
        store.apply_token(id, token).unwrap();
        store.update_token(token, [(FontSize, StyleValue::px(18.0))]).unwrap();
        assert_eq!(store.current_style().value(FontSize), Some(&StyleValue::px(18.0)));
    }

    #[test]
    fn debug_summarises_state() {
        let (store, _) = selected_store();
        let dbg = format!("{store:?}");
        assert!(dbg.contains("StyleStore"));
        assert!(dbg.contains("instances: 1"));
    }
}
