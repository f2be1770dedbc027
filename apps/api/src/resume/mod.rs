//! Resume analysis: document text → features → ATS score + domain → candidate profile.

pub mod ats;
pub mod domain;
pub mod extract;
pub mod features;
pub mod handlers;
pub mod profile;
pub mod skills;
