//! Built-in essay-example catalog: categories → works → topics.
//!
//! Entities are looked up by slug; a miss at any level is a terminal
//! not-found state, never an error.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayTopic {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteraryWork {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub topics: Vec<EssayTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayCategory {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub works: Vec<LiteraryWork>,
}

/// A resolved topic with its ancestors, for the topic page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicContext {
    pub category: EssayCategory,
    pub work: LiteraryWork,
    pub topic: EssayTopic,
}

impl TopicContext {
    /// `category › work › topic` breadcrumb line.
    pub fn breadcrumb(&self) -> String {
        format!(
            "{} › {} › {}",
            self.category.title, self.work.title, self.topic.title
        )
    }

    /// Sibling topics from the same work, source order.
    pub fn related_topics(&self) -> Vec<&EssayTopic> {
        self.work
            .topics
            .iter()
            .filter(|t| t.id != self.topic.id)
            .collect()
    }
}

/// The full built-in catalog, in display order.
pub fn categories() -> Vec<EssayCategory> {
    vec![
        EssayCategory {
            id: "literature",
            slug: "literature",
            title: "Literature",
            description: "Explore our vast collection of literature essay examples covering classics and contemporary works.",
            works: vec![
                LiteraryWork {
                    id: "the-great-gatsby",
                    slug: "the-great-gatsby",
                    title: "The Great Gatsby",
                    author: "F. Scott Fitzgerald",
                    description: "Analysis of wealth, class, and the elusive American Dream in Fitzgerald's masterpiece.",
                    topics: vec![
                        EssayTopic {
                            id: "symbolism-of-green-light",
                            slug: "symbolism-of-green-light",
                            title: "Symbolism of the Green Light in The Great Gatsby Essay",
                            excerpt: "The green light at the end of Daisy's dock is one of the most significant symbols in literature...",
                            keywords: &["Green Light", "Gatsby Symbolism", "American Dream"],
                        },
                        EssayTopic {
                            id: "the-american-dream-failure",
                            slug: "the-american-dream-failure",
                            title: "The Corruption of the American Dream in Gatsby",
                            excerpt: "How Jay Gatsby's pursuit of Daisy represents the moral decay of 1920s America...",
                            keywords: &["American Dream", "Moral Decay", "Jay Gatsby"],
                        },
                    ],
                },
                LiteraryWork {
                    id: "1984",
                    slug: "1984",
                    title: "1984",
                    author: "George Orwell",
                    description: "Dystopian themes of surveillance, power, and the manipulation of truth.",
                    topics: vec![EssayTopic {
                        id: "totalitarianism-and-control",
                        slug: "totalitarianism-and-control",
                        title: "Totalitarianism and Control in George Orwell's 1984",
                        excerpt: "An exploration of how Big Brother maintains absolute power through thought control...",
                        keywords: &["Totalitarianism", "Surveillance", "Big Brother"],
                    }],
                },
            ],
        },
        EssayCategory {
            id: "history",
            slug: "history",
            title: "History",
            description: "Historical analysis essays from ancient civilizations to modern political movements.",
            works: vec![],
        },
    ]
}

/// Resolve a topic by its slug path. `None` at any missing level.
pub fn find_topic(category_slug: &str, work_slug: &str, topic_slug: &str) -> Option<TopicContext> {
    let category = categories().into_iter().find(|c| c.slug == category_slug)?;
    let work = category.works.iter().find(|w| w.slug == work_slug)?.clone();
    let topic = work.topics.iter().find(|t| t.slug == topic_slug)?.clone();
    Some(TopicContext {
        category,
        work,
        topic,
    })
}
