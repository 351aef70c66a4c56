use crate::domain::{Book, BookDraft, BookId};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct State {
    books: BTreeMap<BookId, Book>,
    next_id: i64,
}

/// BookStoreのインメモリ実装
///
/// データベースなしでのローカル起動とテストに使用する。
/// IDは1から順に採番し、一覧はID順で返す。
pub struct BookStore {
    state: Mutex<State>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                books: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| "in-memory book store lock poisoned".into())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.lock()?.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.lock()?.books.get(&id).cloned())
    }

    async fn save(&self, draft: BookDraft) -> Result<Book> {
        let mut state = self.lock()?;

        let id = BookId::from_i64(state.next_id);
        state.next_id += 1;

        let book = Book::from_draft(id, draft);
        state.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<Option<Book>> {
        let mut state = self.lock()?;

        Ok(state.books.get_mut(&id).map(|book| {
            *book = Book::from_draft(id, draft);
            book.clone()
        }))
    }

    async fn delete_by_id(&self, id: BookId) -> Result<()> {
        self.lock()?.books.remove(&id);
        Ok(())
    }
}
