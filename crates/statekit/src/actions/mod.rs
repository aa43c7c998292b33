
use crate::{
    key::Key,
    page::{Page, PageInfo},
};
use convert_case::{Case, Casing};
use derive_more::Display;
use serde::Serialize;
use std::marker::PhantomData;

///
/// ActionKind
///
/// The fixed catalog of entity operations. The twelve dispatchable
/// operations carry Success/Failure counterparts; Select, Deselect and
/// Clear resolve locally and do not.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ActionKind {
    Clear,
    Create,
    CreateFailure,
    CreateMany,
    CreateManyFailure,
    CreateManySuccess,
    CreateSuccess,
    Delete,
    DeleteFailure,
    DeleteMany,
    DeleteManyFailure,
    DeleteManySuccess,
    DeleteSuccess,
    Deselect,
    Load,
    LoadAll,
    LoadAllFailure,
    LoadAllSuccess,
    LoadFailure,
    LoadMany,
    LoadManyFailure,
    LoadManySuccess,
    LoadPage,
    LoadPageFailure,
    LoadPageSuccess,
    LoadSuccess,
    Replace,
    ReplaceFailure,
    ReplaceSuccess,
    Select,
    Update,
    UpdateFailure,
    UpdateMany,
    UpdateManyFailure,
    UpdateManySuccess,
    UpdateSuccess,
    Upsert,
    UpsertFailure,
    UpsertSuccess,
}

impl ActionKind {
    /// Spelled-out verb for the action tag
    /// (`LoadPageSuccess` -> `"Load Page Success"`).
    #[must_use]
    pub fn verb(self) -> String {
        self.to_string().to_case(Case::Title)
    }
}

///
/// ActionPayload
///
/// Typed payload carried by a generated action.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum ActionPayload<M> {
    Entities(Vec<M>),
    Entity(M),
    Failure(String),
    Key(Key),
    Keys(Vec<Key>),
    None,
    Page(Page),
    PageOfEntities { entities: Vec<M>, page: PageInfo },
}

///
/// Action
///
/// A tagged message describing an intended state change. The tag embeds the
/// declared model name, so a shared dispatch mechanism can route each action
/// to the correct slice.
///

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Action<M> {
    kind: ActionKind,
    tag: String,
    payload: ActionPayload<M>,
}

impl<M> Action<M> {
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Model-unique discriminator, `"[{model}] {verb}"`.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub const fn payload(&self) -> &ActionPayload<M> {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> ActionPayload<M> {
        self.payload
    }
}

///
/// ActionMap
///
/// The action-creator set for one model. Every creator closes over the
/// declared model name. Building is pure and deterministic: repeated builds
/// for the same model emit identical actions.
///

#[derive(Debug)]
pub struct ActionMap<M> {
    model_name: String,
    entity: PhantomData<fn(M) -> M>,
}

impl<M> Clone for ActionMap<M> {
    fn clone(&self) -> Self {
        Self {
            model_name: self.model_name.clone(),
            entity: PhantomData,
        }
    }
}

impl<M> ActionMap<M> {
    #[must_use]
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            entity: PhantomData,
        }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn emit(&self, kind: ActionKind, payload: ActionPayload<M>) -> Action<M> {
        Action {
            kind,
            tag: format!("[{}] {}", self.model_name, kind.verb()),
            payload,
        }
    }

    // ── Load ───────────────────────────────────────────

    pub fn load(&self, key: Key) -> Action<M> {
        self.emit(ActionKind::Load, ActionPayload::Key(key))
    }

    pub fn load_success(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::LoadSuccess, ActionPayload::Entity(entity))
    }

    pub fn load_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(ActionKind::LoadFailure, ActionPayload::Failure(message.into()))
    }

    pub fn load_all(&self) -> Action<M> {
        self.emit(ActionKind::LoadAll, ActionPayload::None)
    }

    pub fn load_all_success(&self, entities: Vec<M>) -> Action<M> {
        self.emit(ActionKind::LoadAllSuccess, ActionPayload::Entities(entities))
    }

    pub fn load_all_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::LoadAllFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    pub fn load_many(&self, keys: Vec<Key>) -> Action<M> {
        self.emit(ActionKind::LoadMany, ActionPayload::Keys(keys))
    }

    pub fn load_many_success(&self, entities: Vec<M>) -> Action<M> {
        self.emit(
            ActionKind::LoadManySuccess,
            ActionPayload::Entities(entities),
        )
    }

    pub fn load_many_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::LoadManyFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    pub fn load_page(&self, page: Page) -> Action<M> {
        self.emit(ActionKind::LoadPage, ActionPayload::Page(page))
    }

    pub fn load_page_success(&self, entities: Vec<M>, page: PageInfo) -> Action<M> {
        self.emit(
            ActionKind::LoadPageSuccess,
            ActionPayload::PageOfEntities { entities, page },
        )
    }

    pub fn load_page_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::LoadPageFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    // ── Create ─────────────────────────────────────────

    pub fn create(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::Create, ActionPayload::Entity(entity))
    }

    pub fn create_success(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::CreateSuccess, ActionPayload::Entity(entity))
    }

    pub fn create_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::CreateFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    pub fn create_many(&self, entities: Vec<M>) -> Action<M> {
        self.emit(ActionKind::CreateMany, ActionPayload::Entities(entities))
    }

    pub fn create_many_success(&self, entities: Vec<M>) -> Action<M> {
        self.emit(
            ActionKind::CreateManySuccess,
            ActionPayload::Entities(entities),
        )
    }

    pub fn create_many_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::CreateManyFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    // ── Update ─────────────────────────────────────────

    pub fn update(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::Update, ActionPayload::Entity(entity))
    }

    pub fn update_success(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::UpdateSuccess, ActionPayload::Entity(entity))
    }

    pub fn update_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::UpdateFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    pub fn update_many(&self, entities: Vec<M>) -> Action<M> {
        self.emit(ActionKind::UpdateMany, ActionPayload::Entities(entities))
    }

    pub fn update_many_success(&self, entities: Vec<M>) -> Action<M> {
        self.emit(
            ActionKind::UpdateManySuccess,
            ActionPayload::Entities(entities),
        )
    }

    pub fn update_many_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::UpdateManyFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    // ── Replace / Upsert ───────────────────────────────

    pub fn replace(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::Replace, ActionPayload::Entity(entity))
    }

    pub fn replace_success(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::ReplaceSuccess, ActionPayload::Entity(entity))
    }

    pub fn replace_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::ReplaceFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    pub fn upsert(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::Upsert, ActionPayload::Entity(entity))
    }

    pub fn upsert_success(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::UpsertSuccess, ActionPayload::Entity(entity))
    }

    pub fn upsert_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::UpsertFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    // ── Delete ─────────────────────────────────────────

    pub fn delete(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::Delete, ActionPayload::Entity(entity))
    }

    pub fn delete_success(&self, entity: M) -> Action<M> {
        self.emit(ActionKind::DeleteSuccess, ActionPayload::Entity(entity))
    }

    pub fn delete_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::DeleteFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    pub fn delete_many(&self, entities: Vec<M>) -> Action<M> {
        self.emit(ActionKind::DeleteMany, ActionPayload::Entities(entities))
    }

    pub fn delete_many_success(&self, entities: Vec<M>) -> Action<M> {
        self.emit(
            ActionKind::DeleteManySuccess,
            ActionPayload::Entities(entities),
        )
    }

    pub fn delete_many_failure(&self, message: impl Into<String>) -> Action<M> {
        self.emit(
            ActionKind::DeleteManyFailure,
            ActionPayload::Failure(message.into()),
        )
    }

    // ── Selection ──────────────────────────────────────

    pub fn select(&self, key: Key) -> Action<M> {
        self.emit(ActionKind::Select, ActionPayload::Key(key))
    }

    pub fn deselect(&self) -> Action<M> {
        self.emit(ActionKind::Deselect, ActionPayload::None)
    }

    pub fn clear(&self) -> Action<M> {
        self.emit(ActionKind::Clear, ActionPayload::None)
    }
}
