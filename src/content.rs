//! Static guide and help copy, and the sidebar links.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: &'static str },
    List { ordered: bool, items: Vec<&'static str> },
    Faq { question: &'static str, answer: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<Section>,
}

fn paragraph(text: &'static str) -> Block {
    Block::Paragraph { text }
}

fn bullets(items: &[&'static str]) -> Block {
    Block::List {
        ordered: false,
        items: items.to_vec(),
    }
}

fn steps(items: &[&'static str]) -> Block {
    Block::List {
        ordered: true,
        items: items.to_vec(),
    }
}

fn faq(question: &'static str, answer: &'static str) -> Block {
    Block::Faq { question, answer }
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { to: "/guide", label: "Guide", icon: "book-open" },
        NavLink { to: "/help", label: "Help", icon: "help-circle" },
        NavLink { to: "/admin/login", label: "Admin", icon: "shield" },
    ]
}

pub fn guide() -> PageContent {
    PageContent {
        title: "User Guide",
        subtitle: "Learn how to browse and download games from Zinda Games",
        sections: vec![
            Section {
                heading: "Finding Games",
                blocks: vec![
                    paragraph(
                        "Use the search bar at the top of the page to find specific games. Simply type \
                         the game name or keywords related to the game you're looking for.",
                    ),
                    paragraph(
                        "Browse the homepage to see the latest games added to our library. New games \
                         appear first, making it easy to discover fresh content.",
                    ),
                ],
            },
            Section {
                heading: "Game Information",
                blocks: vec![
                    paragraph("Click on any game card to view detailed information including:"),
                    bullets(&[
                        "Full game description",
                        "Screenshots and media",
                        "Minimum system requirements",
                        "Recommended system requirements",
                        "Download link",
                    ]),
                ],
            },
            Section {
                heading: "Downloading Games",
                blocks: vec![
                    paragraph("To download a game:"),
                    steps(&[
                        "Browse or search for your desired game",
                        "Click on the game card to view full details",
                        "Check the system requirements to ensure compatibility",
                        "Click the \"Download Now\" button",
                        "The download will begin from our trusted sources",
                    ]),
                    paragraph(
                        "Make sure you have enough storage space and meet the minimum system \
                         requirements before downloading.",
                    ),
                ],
            },
            Section {
                heading: "Navigation",
                blocks: vec![
                    paragraph("Use the sidebar on the left to access different sections:"),
                    bullets(&[
                        "Guide: This page with helpful information",
                        "Help: Get assistance and support",
                        "Admin: Admin panel access (administrators only)",
                    ]),
                ],
            },
        ],
    }
}

pub fn help() -> PageContent {
    PageContent {
        title: "Help & Support",
        subtitle: "Find answers to common questions and get assistance",
        sections: vec![
            Section {
                heading: "Frequently Asked Questions",
                blocks: vec![
                    faq(
                        "Are the games free to download?",
                        "Yes, all games on Zinda Games are available for free download. However, \
                         please respect the original creators and support them if you enjoy their games.",
                    ),
                    faq(
                        "How do I know if a game will run on my PC?",
                        "Each game page includes both minimum and recommended system requirements. \
                         Compare these with your PC specifications to ensure compatibility.",
                    ),
                    faq(
                        "Why is my download slow?",
                        "Download speeds depend on your internet connection and the source server. \
                         Try downloading during off-peak hours for better speeds, or check your \
                         internet connection.",
                    ),
                    faq(
                        "What file formats are the games in?",
                        "Games are typically provided in compressed formats (ZIP, RAR) or as \
                         installers (EXE). You'll need appropriate software to extract and install them.",
                    ),
                ],
            },
            Section {
                heading: "Troubleshooting",
                blocks: vec![
                    paragraph("Game won't start"),
                    bullets(&[
                        "Verify your system meets the minimum requirements",
                        "Update your graphics drivers",
                        "Run the game as administrator",
                        "Install required redistributables (DirectX, Visual C++)",
                    ]),
                    paragraph("Download link not working"),
                    bullets(&[
                        "Try refreshing the page",
                        "Clear your browser cache",
                        "Try a different browser",
                        "Check if the download source is temporarily unavailable",
                    ]),
                ],
            },
            Section {
                heading: "Safety & Security",
                blocks: vec![
                    paragraph("We strive to provide safe download links, but we recommend:"),
                    bullets(&[
                        "Keep your antivirus software updated",
                        "Scan downloaded files before opening",
                        "Download only from trusted sources",
                        "Be cautious of any requests for personal information",
                    ]),
                ],
            },
            Section {
                heading: "Still Need Help?",
                blocks: vec![paragraph(
                    "If you couldn't find the answer to your question, please check back later for \
                     updates or look for community forums related to the specific game you're \
                     interested in.",
                )],
            },
        ],
    }
}
