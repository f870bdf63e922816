//! Client-side context providers shared by every page.

use leptos::prelude::*;

use crate::model::DiagnosisRequest;

/// Signed-in user, if any.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub user: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    pub fn display_name(&self) -> String {
        self.user.get().unwrap_or_else(|| "Guest".to_string())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-wide UI state.
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
    /// One-line message shown in the banner under the navigation bar.
    pub notice: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            notice: RwSignal::new(None),
        }
    }

    pub fn notify(&self, msg: impl Into<String>) {
        self.notice.set(Some(msg.into()));
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnosis requests submitted in this session, oldest first.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosisContext {
    pub requests: RwSignal<Vec<DiagnosisRequest>>,
}

impl DiagnosisContext {
    pub fn new() -> Self {
        Self {
            requests: RwSignal::new(Vec::new()),
        }
    }

    /// Record a new request and return its id.
    pub fn submit(&self, crop: String, image_name: String, notes: String) -> u32 {
        let mut id = 0;
        self.requests.update(|list| {
            id = next_request_id(list);
            list.push(DiagnosisRequest {
                id,
                crop,
                image_name,
                notes,
            });
        });
        id
    }
}

impl Default for DiagnosisContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide all three contexts. Called once by the root component.
pub fn provide_contexts() {
    provide_context(AuthContext::new());
    provide_context(AppContext::new());
    provide_context(DiagnosisContext::new());
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_diagnosis() -> DiagnosisContext {
    expect_context::<DiagnosisContext>()
}

fn next_request_id(list: &[DiagnosisRequest]) -> u32 {
    list.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// Browsers report file inputs as `C:\fakepath\leaf.jpg`; keep the file name.
pub fn file_name_from_input(value: &str) -> String {
    value
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: u32) -> DiagnosisRequest {
        DiagnosisRequest {
            id,
            crop: "Tomato".into(),
            image_name: "leaf.jpg".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_file_name_from_input() {
        assert_eq!(file_name_from_input("C:\\fakepath\\leaf.jpg"), "leaf.jpg");
        assert_eq!(file_name_from_input("/home/me/leaf 2.png"), "leaf 2.png");
        assert_eq!(file_name_from_input("leaf.jpg"), "leaf.jpg");
        assert_eq!(file_name_from_input(""), "");
    }

    #[test]
    fn test_submit_assigns_ids_in_order() {
        let owner = Owner::new();
        owner.with(|| {
            let diagnosis = DiagnosisContext::new();
            let first = diagnosis.submit("Tomato".into(), "leaf.jpg".into(), String::new());
            let second = diagnosis.submit("Corn".into(), "stalk.png".into(), "after rain".into());
            assert_eq!((first, second), (1, 2));

            let requests = diagnosis.requests.get_untracked();
            let ids: Vec<u32> = requests.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![1, 2]);
            assert_eq!(requests[0].crop, "Tomato");
            assert_eq!(requests[1].notes, "after rain");
        });
    }

    #[test]
    fn test_next_request_id() {
        assert_eq!(next_request_id(&[]), 1);
        assert_eq!(next_request_id(&[request(1), request(4), request(2)]), 5);
    }
}
