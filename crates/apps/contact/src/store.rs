use std::{cell::RefCell, rc::Rc};

use platform_host::{HttpService, ListenerSet, Subscription};

use crate::form::{self, ContactDraft, ContactSubmitError};

#[derive(Clone, Default)]
/// Instance-owned draft shared with every mounted Contact view.
///
/// Edits made by a view are stored silently; [`DraftStore::reset`] broadcasts so open views can
/// clear their inputs.
pub struct DraftStore {
    draft: Rc<RefCell<ContactDraft>>,
    resets: ListenerSet<ContactDraft>,
}

impl DraftStore {
    /// Returns a copy of the current draft.
    pub fn snapshot(&self) -> ContactDraft {
        self.draft.borrow().clone()
    }

    /// Applies an in-place edit.
    pub fn update(&self, edit: impl FnOnce(&mut ContactDraft)) {
        edit(&mut self.draft.borrow_mut());
    }

    /// Clears the draft and notifies reset listeners.
    pub fn reset(&self) {
        let cleared = ContactDraft::default();
        *self.draft.borrow_mut() = cleared.clone();
        self.resets.notify(&cleared);
    }

    /// Submits `draft` and clears the stored draft once the endpoint accepts it.
    ///
    /// The reset happens whether or not a view is still mounted to see the result.
    ///
    /// # Errors
    ///
    /// Returns the validation or transport failure; the stored draft is kept in that case.
    pub async fn submit(
        &self,
        http: &dyn HttpService,
        draft: &ContactDraft,
    ) -> Result<(), ContactSubmitError> {
        form::submit(http, draft).await?;
        self.reset();
        Ok(())
    }

    /// Registers `listener` for future resets.
    pub fn on_reset(&self, listener: impl Fn(&ContactDraft) + 'static) -> Subscription {
        self.resets.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use platform_host::MemoryHttpService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_resets_are_broadcast() {
        let store = DraftStore::default();
        let heard = Rc::new(Cell::new(0));
        let heard_by_listener = heard.clone();
        let subscription = store.on_reset(move |_| heard_by_listener.set(heard_by_listener.get() + 1));

        store.update(|draft| draft.email = "ada@example.com".to_string());
        assert_eq!(heard.get(), 0);
        assert_eq!(store.snapshot().email, "ada@example.com");

        store.reset();
        assert_eq!(heard.get(), 1);
        assert_eq!(store.snapshot(), ContactDraft::default());

        subscription.unsubscribe();
        store.reset();
        assert_eq!(heard.get(), 1);
    }

    fn filled(store: &DraftStore) -> ContactDraft {
        store.update(|draft| {
            draft.name = "Ada".to_string();
            draft.email = "ada@example.com".to_string();
            draft.message = "Hello there".to_string();
        });
        store.snapshot()
    }

    #[test]
    fn accepted_submission_clears_draft_without_a_mounted_view() {
        let store = DraftStore::default();
        let http = MemoryHttpService::default();
        let draft = filled(&store);

        assert_eq!(block_on(store.submit(&http, &draft)), Ok(()));

        assert_eq!(store.snapshot(), ContactDraft::default());
        assert_eq!(http.posts().len(), 1);
    }

    #[test]
    fn failed_submission_keeps_draft() {
        let store = DraftStore::default();
        let http = MemoryHttpService::default();
        http.respond_to_posts(Err("offline".to_string()));
        let draft = filled(&store);

        assert!(block_on(store.submit(&http, &draft)).is_err());

        assert_eq!(store.snapshot(), draft);
    }
}
