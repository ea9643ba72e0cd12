use serde::Serialize;

use crate::models::user::User;

/// Profile fields that contribute to completion, with their weights.
/// Weights sum to 100.
const PROFILE_WEIGHTS: &[(ProfileField, u32)] = &[
    (ProfileField::Name, 15),
    (ProfileField::Email, 10),
    (ProfileField::Phone, 10),
    (ProfileField::BirthDate, 8),
    (ProfileField::Nationality, 5),
    (ProfileField::AddressCity, 8),
    (ProfileField::AddressState, 8),
    (ProfileField::ProfessionalSummary, 12),
    (ProfileField::Skills, 10),
    (ProfileField::Education, 8),
    (ProfileField::Languages, 6),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    BirthDate,
    Nationality,
    AddressCity,
    AddressState,
    ProfessionalSummary,
    Skills,
    Education,
    Languages,
}

impl ProfileField {
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::BirthDate => "birthDate",
            ProfileField::Nationality => "nationality",
            ProfileField::AddressCity => "address.city",
            ProfileField::AddressState => "address.state",
            ProfileField::ProfessionalSummary => "professionalInfo.summary",
            ProfileField::Skills => "skills",
            ProfileField::Education => "education",
            ProfileField::Languages => "languages",
        }
    }

    fn is_filled(self, user: &User) -> bool {
        match self {
            ProfileField::Name => has_text(user.name.as_deref()),
            ProfileField::Email => has_text(user.email.as_deref()),
            ProfileField::Phone => has_text(user.phone.as_deref()),
            ProfileField::BirthDate => user.birth_date.is_some(),
            ProfileField::Nationality => has_text(user.nationality.as_deref()),
            ProfileField::AddressCity => {
                has_text(user.address.as_ref().and_then(|a| a.city.as_deref()))
            }
            ProfileField::AddressState => {
                has_text(user.address.as_ref().and_then(|a| a.state.as_deref()))
            }
            ProfileField::ProfessionalSummary => has_text(
                user.professional_info
                    .as_ref()
                    .and_then(|p| p.summary.as_deref()),
            ),
            ProfileField::Skills => !user.skills.is_empty(),
            ProfileField::Education => !user.education.is_empty(),
            ProfileField::Languages => !user.languages.is_empty(),
        }
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletion {
    pub percentage: u8,
    pub missing_fields: Vec<&'static str>,
}

/// Weighted completion score for a candidate profile. A missing profile scores 0.
pub fn profile_completion(user: Option<&User>) -> ProfileCompletion {
    let Some(user) = user else {
        return ProfileCompletion {
            percentage: 0,
            missing_fields: PROFILE_WEIGHTS.iter().map(|(f, _)| f.key()).collect(),
        };
    };

    let total_weight: u32 = PROFILE_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut score = 0u32;
    let mut missing_fields = Vec::new();
    for (field, weight) in PROFILE_WEIGHTS {
        if field.is_filled(user) {
            score += weight;
        } else {
            missing_fields.push(field.key());
        }
    }

    let percentage = (f64::from(score) / f64::from(total_weight) * 100.0).round();
    ProfileCompletion {
        percentage: percentage.clamp(0.0, 100.0) as u8,
        missing_fields,
    }
}
