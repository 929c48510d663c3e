//! Built-in skill data.

pub(super) const TECHNICAL: &[&str] = &[
    // Programming languages
    "Python", "Java", "JavaScript", "TypeScript", "C", "C++", "C#", "Ruby", "PHP",
    "Swift", "Kotlin", "Go", "Rust", "COBOL", "Fortran", "R", "Scala", "Perl",
    "Objective-C", "Groovy", "Dart", "Lua", "Haskell", "Clojure", "Erlang", "F#",
    // Web development
    "HTML", "CSS", "SASS", "LESS", "Bootstrap", "Tailwind CSS", "Material UI",
    "React", "Angular", "Vue.js", "Svelte", "jQuery", "Redux", "Next.js", "Gatsby",
    "Node.js", "Express", "Django", "Flask", "Ruby on Rails", "Spring", "ASP.NET",
    "Laravel", "CodeIgniter", "Symfony", "WordPress", "Drupal", "Magento", "Shopify",
    // Data science and machine learning
    "TensorFlow", "PyTorch", "Keras", "scikit-learn", "Pandas", "NumPy", "SciPy",
    "MATLAB", "Jupyter", "Matplotlib", "Seaborn", "Tableau", "Power BI", "Alteryx",
    "SPSS", "SAS", "R Studio", "Databricks", "Dataiku", "H2O",
    "Artificial Intelligence", "Machine Learning", "Deep Learning", "Natural Language Processing",
    "Computer Vision",
    "Data Analysis", "Data Engineering", "Data Visualization",
    // Cloud and DevOps
    "AWS", "Azure", "Google Cloud", "IBM Cloud", "Oracle Cloud", "DigitalOcean",
    "Docker", "Kubernetes", "Jenkins", "Travis CI", "CircleCI", "GitHub Actions",
    "Terraform", "Ansible", "Puppet", "Chef", "Vagrant", "Prometheus", "Grafana",
    "Cloud Computing", "DevOps", "CI/CD", "Linux", "Microservices",
    // Databases
    "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle",
    "Microsoft SQL Server", "Cassandra", "Couchbase", "Elasticsearch", "Firebase",
    "DynamoDB", "MariaDB", "Neo4j", "GraphQL", "T-SQL", "PL/SQL", "ER Diagrams",
    "Database Management Systems",
    // Mobile
    "Android", "iOS", "React Native", "Flutter", "Xamarin", "Ionic", "Cordova",
    "SwiftUI", "UIKit", "Kotlin Multiplatform", "App Store Connect", "Google Play Console",
    // Version control and collaboration
    "Git", "GitHub", "GitLab", "Bitbucket", "SVN", "Mercurial", "JIRA",
    "Confluence", "Trello", "Asana", "Notion", "Slack", "Microsoft Teams",
    // Design
    "Photoshop", "Illustrator", "InDesign", "Figma", "Sketch", "Adobe XD",
    "After Effects", "Premiere Pro", "Blender", "AutoCAD", "Revit", "SketchUp",
    // Practices
    "Agile", "Scrum", "REST APIs", "Networking", "Cybersecurity", "Software Development",
    "Web Development", "Unit Testing", "Enterprise Architecture",
    // Office and business tools
    "Excel", "VBA", "PowerPoint", "Word", "Outlook", "SharePoint", "Power Automate",
    "PowerApps", "Access", "Salesforce", "SAP", "QuickBooks", "Visio",
];

pub(super) const SOFT: &[&str] = &[
    // Communication
    "Communication", "Public Speaking", "Presentation", "Writing", "Technical Writing",
    "Active Listening", "Negotiation", "Persuasion", "Storytelling", "Facilitation",
    // Leadership and management
    "Leadership", "Team Management", "Project Management", "Strategic Planning",
    "Delegation", "Coaching", "Mentoring", "Decision Making", "Change Management",
    "Performance Management", "Risk Management", "Conflict Resolution",
    // Interpersonal
    "Teamwork", "Collaboration", "Emotional Intelligence", "Empathy", "Interpersonal Skills",
    "Relationship Building", "Cultural Awareness", "Diplomacy", "Customer Service",
    // Problem solving
    "Problem Solving", "Critical Thinking", "Analytical Thinking", "Research",
    "Troubleshooting", "Creativity", "Innovation", "Design Thinking",
    // Organization
    "Time Management", "Organization", "Multitasking", "Prioritization",
    "Attention to Detail", "Planning", "Goal Setting", "Process Improvement",
    // Adaptability
    "Adaptability", "Flexibility", "Learning Agility", "Resilience", "Stress Management",
];

/// Domain skill lists as `(domain, skills)`. A name already defined by an
/// earlier list keeps its first category.
pub(super) const DOMAINS: &[(&str, &[&str])] = &[
    (
        "healthcare",
        &[
            "Patient Care", "Medical Terminology", "Electronic Health Records (EHR)",
            "Clinical Documentation", "HIPAA Compliance", "Medical Coding", "Vital Signs",
            "Infection Control", "Medication Administration", "Clinical Assessment",
            "Patient Education", "Care Coordination", "CPR", "First Aid", "Phlebotomy",
            "Telehealth", "Epic", "Cerner", "MEDITECH", "Allscripts",
        ],
    ),
    (
        "finance",
        &[
            "Financial Analysis", "Financial Modeling", "Forecasting", "Budgeting",
            "Accounting", "Bookkeeping", "Financial Reporting", "Audit", "Tax Preparation",
            "Risk Assessment", "Compliance", "Banking", "Investment Management",
            "Portfolio Management", "Asset Management", "Bloomberg Terminal",
            "QuickBooks", "SAP Finance", "Oracle Financials", "NetSuite",
        ],
    ),
    (
        "education",
        &[
            "Curriculum Development", "Instructional Design", "Lesson Planning",
            "Student Assessment", "Classroom Management", "Educational Technology",
            "Differentiated Instruction", "Special Education", "eLearning", "LMS",
            "Blackboard", "Canvas", "Moodle", "Google Classroom", "Student Engagement",
            "Educational Psychology", "Pedagogy", "IEP Development", "FERPA",
        ],
    ),
    (
        "legal",
        &[
            "Legal Research", "Legal Writing", "Case Management", "Contract Drafting",
            "Contract Review", "Compliance", "Litigation", "Negotiation", "Due Diligence",
            "eDiscovery", "Westlaw", "LexisNexis", "Legal Ethics", "Client Counseling",
            "Regulatory Compliance", "Legal Analysis", "Intellectual Property",
        ],
    ),
    (
        "marketing",
        &[
            "Digital Marketing", "Social Media Marketing", "SEO", "SEM", "Content Marketing",
            "Email Marketing", "Google Analytics", "Google Ads", "Facebook Ads",
            "Instagram Marketing", "LinkedIn Marketing", "Twitter Marketing", "TikTok Marketing",
            "Brand Management", "Market Research", "Competitor Analysis",
            "Customer Segmentation", "CRM", "HubSpot", "Salesforce Marketing Cloud", "Marketo",
            "MailChimp", "Hootsuite",
        ],
    ),
    (
        "sales",
        &[
            "Lead Generation", "Prospecting", "Sales Funnel Management", "Closing Techniques",
            "Relationship Building", "Consultative Selling", "Solution Selling", "B2B Sales",
            "B2C Sales", "Enterprise Sales", "Upselling", "Cross-selling", "Customer Retention",
            "Account Management", "CRM", "Salesforce", "HubSpot CRM", "Pipedrive",
            "Sales Analytics",
        ],
    ),
];

/// Certification catalogue as `(name, acronym, related skills)`.
pub(super) const CERTIFICATIONS: &[(&str, Option<&str>, &[&str])] = &[
    ("AWS Certified Solutions Architect", None, &["AWS", "Cloud Computing"]),
    ("AWS Certified Developer", None, &["AWS", "Cloud Computing"]),
    ("AWS Certified SysOps Administrator", None, &["AWS", "Cloud Computing", "Linux"]),
    ("Microsoft Certified: Azure Administrator", None, &["Azure", "Cloud Computing"]),
    ("Microsoft Certified: Azure Developer", None, &["Azure", "Cloud Computing"]),
    ("Microsoft Certified: Azure Solutions Architect", None, &["Azure", "Cloud Computing"]),
    ("Google Cloud Professional Cloud Architect", None, &["Google Cloud", "Cloud Computing"]),
    ("Google Cloud Professional Data Engineer", None, &["Google Cloud", "Data Engineering", "SQL"]),
    ("Cisco Certified Network Associate", Some("CCNA"), &["Networking"]),
    ("Cisco Certified Network Professional", Some("CCNP"), &["Networking"]),
    ("CompTIA A+", None, &["Troubleshooting"]),
    ("CompTIA Network+", None, &["Networking"]),
    ("CompTIA Security+", None, &["Cybersecurity"]),
    (
        "Certified Information Systems Security Professional",
        Some("CISSP"),
        &["Cybersecurity", "Risk Management"],
    ),
    ("Project Management Professional", Some("PMP"), &["Project Management", "Risk Management"]),
    ("Certified ScrumMaster", Some("CSM"), &["Scrum", "Agile"]),
    ("Professional Scrum Master", Some("PSM"), &["Scrum", "Agile"]),
    ("Oracle Certified Associate", Some("OCA"), &["Oracle", "SQL"]),
    ("Oracle Certified Professional", Some("OCP"), &["Oracle", "SQL", "PL/SQL"]),
    ("MySQL Certified Developer", None, &["MySQL", "SQL"]),
    ("MongoDB Certified Developer", None, &["MongoDB"]),
    ("Certified Kubernetes Administrator", Some("CKA"), &["Kubernetes", "Docker"]),
    ("Certified Kubernetes Application Developer", Some("CKAD"), &["Kubernetes", "Docker"]),
    ("Certified Ethical Hacker", Some("CEH"), &["Cybersecurity"]),
    ("Offensive Security Certified Professional", Some("OSCP"), &["Cybersecurity", "Linux"]),
    ("Salesforce Certified Administrator", None, &["Salesforce", "CRM"]),
    ("Salesforce Certified Developer", None, &["Salesforce"]),
    (
        "Certified Information Security Manager",
        Some("CISM"),
        &["Cybersecurity", "Risk Management"],
    ),
    ("ITIL Foundation", None, &["Change Management", "Process Improvement"]),
    ("TOGAF Certified", None, &["Enterprise Architecture"]),
];

/// Hand-written aliases beyond the generated ones.
pub(super) const EXTRA_ALIASES: &[(&str, &[&str])] = &[
    ("JavaScript", &["js", "ecmascript", "java script"]),
    ("TypeScript", &["ts"]),
    ("Python", &["py", "python3", "python 3"]),
    ("C++", &["cpp"]),
    ("C#", &["csharp", "c sharp"]),
    ("Go", &["golang"]),
    ("Kubernetes", &["k8s"]),
    ("PostgreSQL", &["postgres"]),
    ("MongoDB", &["mongo"]),
    ("AWS", &["amazon web services"]),
    ("Azure", &["microsoft azure"]),
    ("Google Cloud", &["gcp", "google cloud platform"]),
    ("Machine Learning", &["ml"]),
    ("Deep Learning", &["dl"]),
    ("Natural Language Processing", &["nlp"]),
    ("Artificial Intelligence", &["ai"]),
    ("CI/CD", &["ci cd", "continuous integration", "continuous delivery"]),
    ("REST APIs", &["rest api", "restful apis", "restful api", "restful services"]),
    ("Database Management Systems", &["dbms", "database management system", "database management"]),
    ("Microsoft SQL Server", &["sql server", "mssql"]),
    ("Ruby on Rails", &["rails"]),
    ("scikit-learn", &["sklearn", "scikit learn"]),
    ("Cybersecurity", &["cyber security", "information security"]),
    ("Power BI", &["powerbi"]),
];

/// Technology stacks used to suggest related skills.
pub(super) const STACKS: &[(&str, &[&str])] = &[
    ("web_frontend", &["HTML", "CSS", "JavaScript", "TypeScript", "React", "Angular", "Vue.js"]),
    ("web_backend", &["Node.js", "Express", "Django", "Flask", "Ruby on Rails", "Spring"]),
    ("data_science", &["Python", "R", "TensorFlow", "PyTorch", "Pandas", "NumPy"]),
    ("database", &["SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle"]),
    ("cloud", &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes"]),
    ("mobile", &["Android", "iOS", "React Native", "Flutter", "Swift", "Kotlin"]),
];

/// Aliases that are ordinary English words or otherwise collide with prose.
/// They resolve only on an exact match, never inside a longer phrase.
pub(super) const EXACT_ONLY: &[&str] = &[
    "go", "spring", "express", "swift", "rust", "chef", "puppet", "access", "word",
    "oracle", "canvas", "epic", "next", "sketch", "notion", "slack", "ionic", "dart",
    "less", "sass", "research", "writing", "planning", "organization", "presentation",
    "audit", "banking", "compliance", "flexibility", "creativity", "innovation", "rails",
    "gatsby", "mongo", "redux", "outlook", "blackboard", "coaching", "empathy",
];
