// Built-in Content
// The portfolio data compiled into the binary; portfolio.yaml overrides it

use super::model::{
    ContactInfo, EducationEntry, ExperienceEntry, Portfolio, Profile, ProjectEntry,
    ProjectLink, SkillEntry, SocialLinks,
};

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Shanmukha Sai Shashank Garimella".to_string(),
                headline: "Data Scientist | Machine Learning Engineer | Python Developer"
                    .to_string(),
                intro: "👋 Hello! I'm a passionate Data Scientist and Machine Learning \
                        Engineer with expertise in:"
                    .to_string(),
                focus: vec![
                    "🤖 Machine Learning & Deep Learning".to_string(),
                    "📊 Data Analysis & Visualization".to_string(),
                    "💻 Full-Stack Development".to_string(),
                    "🔧 MLOps & Model Deployment".to_string(),
                ],
                summary: "Currently pursuing my Masters in Data Science at University of \
                          North Texas, I bring hands-on experience from roles at Ezynest \
                          LLC, Tiger Analytics, and Tata Consultancy Services."
                    .to_string(),
                photo_path: "profile-pic.jpeg".to_string(),
            },
            social: SocialLinks {
                linkedin: "https://www.linkedin.com/in/shashank-garimella-27a4b6193/"
                    .to_string(),
                github: "https://github.com/shashank10081999".to_string(),
            },
            experience: vec![
                ExperienceEntry {
                    role: "Python Developer (Intern)".to_string(),
                    company: "Ezynest LLC".to_string(),
                    period: "Aug 2024 - Present".to_string(),
                    location: "Dallas, TX".to_string(),
                    highlights: vec![
                        "Developed Python scripts for Azure DevOps automation, reducing \
                         manual setup time by 30%"
                            .to_string(),
                        "Improved cross-team collaboration efficiency by 25% through \
                         dynamic permission solutions"
                            .to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Machine Learning Engineer".to_string(),
                    company: "Tiger Analytics".to_string(),
                    period: "May 2022 - Dec 2022".to_string(),
                    location: "Hyderabad, India".to_string(),
                    highlights: vec![
                        "Engineered CI/CD pipeline using Databricks and Azure DevOps"
                            .to_string(),
                        "Reduced deployment time by 40% and increased model accuracy by 10%"
                            .to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Assistant System Engineer".to_string(),
                    company: "Tata Consultancy Services".to_string(),
                    period: "Oct 2020 - Apr 2022".to_string(),
                    location: "Hyderabad, India".to_string(),
                    highlights: vec![
                        "Managed ETL processes with 99.9% data accuracy for 15 million \
                         records monthly"
                            .to_string(),
                        "Reduced data errors by 20% through cross-functional collaboration"
                            .to_string(),
                    ],
                },
            ],
            skills: vec![
                SkillEntry { name: "Python".to_string(), level: 90 },
                SkillEntry { name: "TensorFlow/PyTorch".to_string(), level: 85 },
                SkillEntry { name: "SQL".to_string(), level: 80 },
                SkillEntry { name: "Azure".to_string(), level: 75 },
                SkillEntry { name: "Docker".to_string(), level: 70 },
            ],
            expertise: vec![
                "Machine Learning".to_string(),
                "Deep Learning".to_string(),
                "NLP".to_string(),
                "Data Analysis".to_string(),
                "MLOps".to_string(),
                "ETL Pipeline Development".to_string(),
            ],
            projects: vec![
                ProjectEntry {
                    title: "Pneumonia Detection and Explainability".to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "Vision Transformers".to_string(),
                        "k-NN".to_string(),
                        "LLM".to_string(),
                        "PyTorch".to_string(),
                    ],
                    highlights: vec![
                        "Developed ViT model achieving 90% accuracy in pneumonia \
                         classification"
                            .to_string(),
                        "Implemented k-NN for similar case retrieval".to_string(),
                        "Integrated LLM for human-readable diagnosis explanations"
                            .to_string(),
                    ],
                    link: "pneumonia_detection".to_string(),
                },
                ProjectEntry {
                    title: "Severity Sensor Fault Detection".to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "AWS".to_string(),
                        "Flask".to_string(),
                        "Git".to_string(),
                        "Docker".to_string(),
                    ],
                    highlights: vec![
                        "Built binary classification model with 90% accuracy for sensor \
                         fault detection"
                            .to_string(),
                        "Implemented Docker containerization reducing deployment time by 40%"
                            .to_string(),
                    ],
                    link: "sensor_fault".to_string(),
                },
                ProjectEntry {
                    title: "Automatic Number Plate Recognition".to_string(),
                    technologies: vec!["Python".to_string(), "Deep Learning".to_string()],
                    highlights: vec![
                        "Achieved 95% precision and 92% recall in license plate detection"
                            .to_string(),
                        "Developed efficient data preprocessing pipeline using XML \
                         annotations"
                            .to_string(),
                    ],
                    link: "number_plate".to_string(),
                },
                ProjectEntry {
                    title: "Language Identification".to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "Deep Learning".to_string(),
                        "AWS".to_string(),
                    ],
                    highlights: vec![
                        "Developed language identification system with 95% accuracy"
                            .to_string(),
                        "Utilized CNNs for pattern extraction from audio spectrograms"
                            .to_string(),
                    ],
                    link: "language_identification".to_string(),
                },
                ProjectEntry {
                    title: "Face Authenticator".to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "MTCNN".to_string(),
                        "FastAPI".to_string(),
                    ],
                    highlights: vec![
                        "Implemented two-stage authentication system".to_string(),
                        "Enhanced facial detection accuracy by 30%".to_string(),
                    ],
                    link: "face_authenticator".to_string(),
                },
            ],
            project_links: vec![
                ProjectLink {
                    name: "pneumonia_detection".to_string(),
                    url: "https://github.com/shashank10081999/pneumonia-detection"
                        .to_string(),
                },
                ProjectLink {
                    name: "sensor_fault".to_string(),
                    url: "https://github.com/shashank10081999/sensor-fault-detection"
                        .to_string(),
                },
                ProjectLink {
                    name: "number_plate".to_string(),
                    url: "https://github.com/shashank10081999/number-plate-recognition"
                        .to_string(),
                },
                ProjectLink {
                    name: "language_identification".to_string(),
                    url: "https://github.com/shashank10081999/language-identification"
                        .to_string(),
                },
                ProjectLink {
                    name: "face_authenticator".to_string(),
                    url: "https://github.com/shashank10081999/Face-matching-and-Face-Recognition"
                        .to_string(),
                },
            ],
            education: vec![
                EducationEntry {
                    institution: "University of North Texas".to_string(),
                    program: "Masters in Data Science".to_string(),
                    period: "Jan 2023 - Dec 2024".to_string(),
                    notes: vec!["CGPA: 3.8".to_string()],
                },
                EducationEntry {
                    institution: "Gandhi Institute of Technology and Management".to_string(),
                    program: "Bachelor of Technology in Electronics and Communication \
                              Engineering"
                        .to_string(),
                    period: "May 2016 - May 2020".to_string(),
                    notes: vec!["CGPA: 3.61".to_string()],
                },
            ],
            certifications: vec![
                "Professional Certification on Data Science by IBM".to_string(),
                "Certification on Python by University of Michigan".to_string(),
            ],
            contact: ContactInfo {
                location: "Dallas, Texas".to_string(),
                email: "shanmukhasaishashankgarimella@gmail.com".to_string(),
                phone: "+1 945-267-5622".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_panels() {
        let portfolio = Portfolio::default();

        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.skills.len(), 5);
        assert_eq!(portfolio.expertise.len(), 6);
        assert_eq!(portfolio.projects.len(), 5);
        assert_eq!(portfolio.project_links.len(), 5);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.certifications.len(), 2);
    }

    #[test]
    fn test_skill_order_and_levels() {
        let portfolio = Portfolio::default();
        let skills: Vec<(&str, u8)> = portfolio
            .skills
            .iter()
            .map(|s| (s.name.as_str(), s.level))
            .collect();

        assert_eq!(
            skills,
            vec![
                ("Python", 90),
                ("TensorFlow/PyTorch", 85),
                ("SQL", 80),
                ("Azure", 75),
                ("Docker", 70),
            ]
        );
    }

    #[test]
    fn test_every_project_has_a_link() {
        let portfolio = Portfolio::default();
        for project in &portfolio.projects {
            assert!(
                portfolio.project_url(&project.link).is_some(),
                "project '{}' is missing a link entry",
                project.title
            );
        }
    }
}
