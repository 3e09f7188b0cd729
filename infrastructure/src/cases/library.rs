//! The built-in case library.
//!
//! Three ready-to-argue case files spanning criminal, contract, and
//! tort law. Lookup accepts an exact id or a case-insensitive title
//! fragment.

use gavel_domain::{Case, EvidenceItem, EvidenceKind};

pub struct CaseLibrary {
    cases: Vec<Case>,
}

impl CaseLibrary {
    pub fn builtin() -> Self {
        Self {
            cases: vec![people_v_carter(), smith_v_megacorp(), johnson_v_city_hospital()],
        }
    }

    pub fn all(&self) -> &[Case] {
        &self.cases
    }

    /// Find a case by id, or by a case-insensitive title fragment.
    pub fn find(&self, needle: &str) -> Option<&Case> {
        if let Some(case) = self.cases.iter().find(|c| c.id == needle) {
            return Some(case);
        }
        let needle = needle.to_lowercase();
        self.cases
            .iter()
            .find(|c| c.title.to_lowercase().contains(&needle))
    }
}

fn people_v_carter() -> Case {
    Case {
        id: "1".to_string(),
        title: "People v. Carter".to_string(),
        case_type: "criminal".to_string(),
        difficulty: 3,
        issue: "4th Amendment Search and Seizure".to_string(),
        description: "Whether evidence obtained during a warrantless search should be suppressed"
            .to_string(),
        facts: "Police stopped defendant's vehicle for a broken taillight. During the stop, \
                officers smelled marijuana and searched the vehicle without a warrant, finding \
                illegal substances."
            .to_string(),
        statutes: "U.S. Constitution, Fourth Amendment; Federal Rules of Criminal Procedure 41; \
                   State Vehicle Code § 14.3"
            .to_string(),
        burden_of_proof: "The prosecution must establish probable cause and justify the \
                          warrantless search under a recognized exception"
            .to_string(),
        user_argument: "The officer had probable cause because the smell of marijuana alone \
                        justifies a vehicle search under the automobile exception"
            .to_string(),
        defense_thesis: "The warrantless search was unconstitutional because the officer lacked \
                         sufficient probable cause and exceeded the lawful scope of any \
                         permissible exception"
            .to_string(),
        notes: "Key issue is whether marijuana odor alone constitutes probable cause in \
                jurisdictions where marijuana may be legal. Defense should challenge reliability \
                of officer's observations and question whether exigent circumstances existed. \
                Prosecution must establish clear timeline and articulate specific facts \
                supporting probable cause."
            .to_string(),
        evidence: vec![
            EvidenceItem {
                name: "Police Report".to_string(),
                content: "Officers detected strong odor of marijuana from vehicle".to_string(),
                kind: EvidenceKind::Document,
            },
            EvidenceItem {
                name: "Dash Cam Footage".to_string(),
                content: "Video shows traffic stop and subsequent search".to_string(),
                kind: EvidenceKind::Video,
            },
        ],
        precedents: vec![
            "Terry v. Ohio (1968) - Reasonable suspicion standard".to_string(),
            "Arizona v. Gant (2009) - Vehicle search limitations".to_string(),
        ],
    }
}

fn smith_v_megacorp() -> Case {
    Case {
        id: "2".to_string(),
        title: "Smith v. MegaCorp Industries".to_string(),
        case_type: "civil".to_string(),
        difficulty: 2,
        issue: "Breach of Employment Contract".to_string(),
        description: "Employee claims wrongful termination and seeks damages".to_string(),
        facts: "Employee was terminated after 10 years without cause. Employment contract \
                included specific termination procedures that were allegedly not followed."
            .to_string(),
        statutes: "California Labor Code §§ 2922, 2924; Restatement (Second) of Contracts § 205"
            .to_string(),
        burden_of_proof: "The plaintiff must prove by preponderance of evidence that defendant \
                          breached the employment contract and that damages resulted"
            .to_string(),
        user_argument: "MegaCorp followed proper at-will employment procedures and had \
                        legitimate business reasons for the termination"
            .to_string(),
        defense_thesis: "The termination violated the implied covenant of good faith and fair \
                         dealing, as the company failed to follow its own contractual procedures"
            .to_string(),
        notes: "Focus on whether the contract created implied obligations beyond at-will status. \
                Plaintiff should emphasize 10-year tenure and company's failure to follow own \
                written procedures. Defendant needs to establish business necessity and show no \
                discriminatory motive."
            .to_string(),
        evidence: vec![
            EvidenceItem {
                name: "Employment Contract".to_string(),
                content: "Contract requires 30-day notice and performance review".to_string(),
                kind: EvidenceKind::Document,
            },
            EvidenceItem {
                name: "Termination Letter".to_string(),
                content: "Letter provides immediate termination without stated cause".to_string(),
                kind: EvidenceKind::Document,
            },
        ],
        precedents: vec![
            "Foley v. Interactive Data Corp (1988) - Implied covenant of good faith".to_string(),
            "Guz v. Bechtel National Inc. (2000) - At-will employment exceptions".to_string(),
        ],
    }
}

fn johnson_v_city_hospital() -> Case {
    Case {
        id: "3".to_string(),
        title: "Johnson v. City Hospital".to_string(),
        case_type: "torts".to_string(),
        difficulty: 4,
        issue: "Medical Malpractice and Negligence".to_string(),
        description: "Patient alleges surgical error resulted in permanent injury".to_string(),
        facts: "Plaintiff underwent routine surgery. Post-operative complications arose from \
                alleged surgical errors. Medical records show deviation from standard procedures."
            .to_string(),
        statutes: "California Civil Code § 3333.2; Code of Civil Procedure § 340.5; Health & \
                   Safety Code § 1599"
            .to_string(),
        burden_of_proof: "The plaintiff must establish by preponderance of evidence: (1) duty of \
                          care, (2) breach of that duty, (3) causation, and (4) damages"
            .to_string(),
        user_argument: "The hospital followed standard medical procedures and the complications \
                        were an unfortunate but unavoidable risk of surgery"
            .to_string(),
        defense_thesis: "The surgeon deviated from the accepted standard of care, directly \
                         causing preventable injuries and permanent harm to the patient"
            .to_string(),
        notes: "Medical malpractice requires expert testimony establishing standard of care and \
                causation. Plaintiff must prove deviation was more than mere error in judgment. \
                Defense should establish informed consent and show complications were known \
                risks. Battle of experts will be decisive."
            .to_string(),
        evidence: vec![
            EvidenceItem {
                name: "Medical Records".to_string(),
                content: "Documentation of procedure and complications".to_string(),
                kind: EvidenceKind::Document,
            },
            EvidenceItem {
                name: "Expert Testimony".to_string(),
                content: "Medical expert states procedure deviated from standard of care"
                    .to_string(),
                kind: EvidenceKind::Testimony,
            },
        ],
        precedents: vec![
            "Landeros v. Flood (1976) - Physician duty of care".to_string(),
            "Helling v. Carey (1974) - Standard of care in medical practice".to_string(),
        ],
    }
}
