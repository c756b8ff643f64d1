use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Applicant profile. At most one resume exists per email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_full_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_city: String,
    pub gender: String,
    pub user_education: String,
    pub user_languages: Vec<String>,
    pub user_experience: String,
    pub user_description: String,
    pub user_skills: String,
    pub last_edit: DateTime<Utc>,
}

impl Resume {
    pub fn from_draft(draft: ResumeDraft, edited_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_full_name: draft.user_full_name,
            user_email: draft.user_email.trim().to_string(),
            user_phone: draft.user_phone,
            user_city: draft.user_city,
            gender: draft.gender,
            user_education: draft.user_education,
            user_languages: draft.user_languages,
            user_experience: draft.user_experience,
            user_description: draft.user_description,
            user_skills: draft.user_skills,
            last_edit: edited_at,
        }
    }

    /// Merge present fields and stamp the edit time. The email key is left alone.
    pub fn apply(&mut self, patch: ResumePatch, edited_at: DateTime<Utc>) {
        let ResumePatch {
            user_full_name,
            user_email: _,
            user_phone,
            user_city,
            gender,
            user_education,
            user_languages,
            user_experience,
            user_description,
            user_skills,
        } = patch;

        if let Some(value) = user_full_name {
            self.user_full_name = value;
        }
        if let Some(value) = user_phone {
            self.user_phone = value;
        }
        if let Some(value) = user_city {
            self.user_city = value;
        }
        if let Some(value) = gender {
            self.gender = value;
        }
        if let Some(value) = user_education {
            self.user_education = value;
        }
        if let Some(value) = user_languages {
            self.user_languages = value;
        }
        if let Some(value) = user_experience {
            self.user_experience = value;
        }
        if let Some(value) = user_description {
            self.user_description = value;
        }
        if let Some(value) = user_skills {
            self.user_skills = value;
        }
        self.last_edit = edited_at;
    }
}

/// Payload accepted when an applicant creates a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDraft {
    pub user_full_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_city: String,
    pub gender: String,
    pub user_education: String,
    pub user_languages: Vec<String>,
    pub user_experience: String,
    pub user_description: String,
    pub user_skills: String,
}

/// Partial resume edit. `user_email` names the resume to edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePatch {
    pub user_full_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub user_city: Option<String>,
    pub gender: Option<String>,
    pub user_education: Option<String>,
    pub user_languages: Option<Vec<String>>,
    pub user_experience: Option<String>,
    pub user_description: Option<String>,
    pub user_skills: Option<String>,
}
