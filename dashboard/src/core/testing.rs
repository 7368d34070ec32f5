//! # Test Doubles
//!
//! An in-memory stand-in for the remote backend, shared by the unit tests of
//! the session store, the handlers, and the app event loop. It records every
//! call so tests can assert that client-side validation short-circuits before
//! any network traffic.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;

use crate::core::service::ApiService;
use crate::services::api::ApiError;
use shared::{
    AuthResponse, Expense, ExpensePayload, FileListing, LoginRequest, ProfileUpdate,
    SignupRequest, StoredFile, UploadResponse, UserInfo,
};

pub fn test_user() -> UserInfo {
    UserInfo {
        id: "u-1".to_string(),
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
        role: "member".to_string(),
    }
}

pub fn test_auth_response() -> AuthResponse {
    AuthResponse {
        token: "token-123".to_string(),
        refresh_token: Some("refresh-456".to_string()),
        expires_in: 3600,
        user: test_user(),
    }
}

fn test_stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap()
}

pub fn test_expense(id: &str, amount: f64, category: &str, date: NaiveDate) -> Expense {
    Expense {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        expense_date: date,
        amount,
        category: category.to_string(),
        merchant: None,
        note: None,
        tags: None,
        attachments: None,
        created_at: test_stamp(),
        updated_at: test_stamp(),
    }
}

/// In-memory backend double. Expense and file state behave like a tiny
/// server so multi-step flows (delete then reload, upload then list) can be
/// exercised end to end.
pub struct FakeBackend {
    pub expenses: Mutex<Vec<Expense>>,
    pub files: Mutex<Vec<StoredFile>>,
    pub calls: Mutex<Vec<String>>,
    pub login_response: Mutex<Result<AuthResponse, ApiError>>,
    pub me_response: Mutex<Result<UserInfo, ApiError>>,
    next_id: Mutex<u64>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            expenses: Mutex::new(Vec::new()),
            files: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            login_response: Mutex::new(Ok(test_auth_response())),
            me_response: Mutex::new(Ok(test_user())),
            next_id: Mutex::new(1),
        }
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        let backend = Self::new();
        *backend.expenses.lock() = expenses;
        backend
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn fresh_id(&self) -> String {
        let mut next = self.next_id.lock();
        let id = format!("gen-{}", *next);
        *next += 1;
        id
    }
}

#[async_trait]
impl ApiService for FakeBackend {
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("signup({})", request.email));
        self.login_response.lock().clone()
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("login({})", request.email));
        self.login_response.lock().clone()
    }

    async fn get_me(&self) -> Result<UserInfo, ApiError> {
        self.record("get_me");
        self.me_response.lock().clone()
    }

    async fn get_profile(&self) -> Result<UserInfo, ApiError> {
        self.record("get_profile");
        self.me_response.lock().clone()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserInfo, ApiError> {
        self.record("update_profile");
        let mut user = test_user();
        user.name = update.name;
        user.email = update.email;
        Ok(user)
    }

    async fn list_expenses(&self, days: u32) -> Result<Vec<Expense>, ApiError> {
        self.record(format!("list_expenses({days})"));
        Ok(self.expenses.lock().clone())
    }

    async fn get_expense(&self, id: &str) -> Result<Expense, ApiError> {
        self.record(format!("get_expense({id})"));
        self.expenses
            .lock()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "expense not found".to_string(),
            })
    }

    async fn create_expense(&self, payload: ExpensePayload) -> Result<Expense, ApiError> {
        self.record("create_expense");
        let expense = Expense {
            id: self.fresh_id(),
            user_id: "u-1".to_string(),
            expense_date: payload.expense_date,
            amount: payload.amount,
            category: payload.category,
            merchant: payload.merchant,
            note: payload.note,
            tags: payload.tags,
            attachments: payload.attachments,
            created_at: test_stamp(),
            updated_at: test_stamp(),
        };
        self.expenses.lock().push(expense.clone());
        Ok(expense)
    }

    async fn update_expense(&self, id: &str, payload: ExpensePayload) -> Result<Expense, ApiError> {
        self.record(format!("update_expense({id})"));
        let mut expenses = self.expenses.lock();
        let Some(existing) = expenses.iter_mut().find(|e| e.id == id) else {
            return Err(ApiError::Status {
                status: 404,
                message: "expense not found".to_string(),
            });
        };
        existing.expense_date = payload.expense_date;
        existing.amount = payload.amount;
        existing.category = payload.category;
        existing.merchant = payload.merchant;
        existing.note = payload.note;
        existing.tags = payload.tags;
        existing.attachments = payload.attachments;
        Ok(existing.clone())
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_expense({id})"));
        let mut expenses = self.expenses.lock();
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(ApiError::Status {
                status: 404,
                message: "expense not found".to_string(),
            });
        }
        Ok(())
    }

    async fn upload_file(&self, filename: String, bytes: Vec<u8>) -> Result<UploadResponse, ApiError> {
        self.record(format!("upload_file({filename})"));
        let key = self.fresh_id();
        self.files.lock().push(StoredFile {
            key: key.clone(),
            size: bytes.len() as u64,
            last_modified: test_stamp(),
            etag: format!("etag-{key}"),
            original_filename: filename.clone(),
        });
        Ok(UploadResponse {
            file_key: key,
            original_filename: filename,
            size_bytes: bytes.len() as u64,
            uploaded_at: test_stamp(),
        })
    }

    async fn list_files(&self) -> Result<FileListing, ApiError> {
        self.record("list_files");
        let files = self.files.lock().clone();
        let total_count = files.len();
        Ok(FileListing { files, total_count })
    }

    fn download_url(&self, key: &str) -> String {
        format!("http://backend.test/s3/files/{key}")
    }
}
