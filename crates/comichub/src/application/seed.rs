use crate::domain::{
    entities::{
        chapter::Chapter,
        comic::{Comic, ComicStatus},
        page::Page,
    },
    repositories::{chapter::ChapterRepository, comic::ComicRepository, page::PageRepository},
    services::{chapter::ChapterService, comic::ComicService, page::PageService},
};

struct SeedComic {
    title: &'static str,
    slug: &'static str,
    author: &'static str,
    synopsis: &'static str,
    status: ComicStatus,
    cover_url: &'static str,
    genres: &'static [&'static str],
}

const SEED_COMICS: &[SeedComic] = &[
    SeedComic {
        title: "Solo Leveling",
        slug: "solo-leveling",
        author: "Chugong",
        synopsis: "In a world where hunters battle monsters that emerge from mysterious gates, Sung Jin-Woo is the weakest of all hunters. But when he finds himself trapped in a deadly dungeon, he discovers a mysterious system that allows him to level up in ways no one else can.",
        status: ComicStatus::Completed,
        cover_url: "https://images.pexels.com/photos/1741230/pexels-photo-1741230.jpeg",
        genres: &["Action", "Fantasy", "Adventure"],
    },
    SeedComic {
        title: "Tower of God",
        slug: "tower-of-god",
        author: "SIU",
        synopsis: "Bam, a boy who was trapped under a mysterious tower his whole life, enters the Tower to chase after his closest friend Rachel. However, to climb the tower, he must face challenges and tests on each floor.",
        status: ComicStatus::Ongoing,
        cover_url: "https://images.pexels.com/photos/2662116/pexels-photo-2662116.jpeg",
        genres: &["Action", "Adventure", "Mystery"],
    },
    SeedComic {
        title: "The Beginning After The End",
        slug: "the-beginning-after-the-end",
        author: "TurtleMe",
        synopsis: "King Grey has unrivaled strength, wealth, and prestige in a world governed by martial ability. However, solitude lingers closely behind those with great power.",
        status: ComicStatus::Ongoing,
        cover_url: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg",
        genres: &["Fantasy", "Action", "Drama"],
    },
    SeedComic {
        title: "Omniscient Reader",
        slug: "omniscient-reader",
        author: "Sing Shong",
        synopsis: "Dokja was an average office worker whose sole interest was reading his favorite web novel. But when the novel suddenly becomes reality, he is the only person who knows how the world will end.",
        status: ComicStatus::Ongoing,
        cover_url: "https://images.pexels.com/photos/1370298/pexels-photo-1370298.jpeg",
        genres: &["Action", "Fantasy", "Thriller"],
    },
    SeedComic {
        title: "Noblesse",
        slug: "noblesse",
        author: "Son Jeho",
        synopsis: "Rai wakes up from 820-years long sleep and starts a new life as a student in a high school founded by his loyal servant, Frankenstein.",
        status: ComicStatus::Completed,
        cover_url: "https://images.pexels.com/photos/2662116/pexels-photo-2662116.jpeg",
        genres: &["Action", "Supernatural", "School"],
    },
];

const CHAPTER_TITLES: &[&str] = &[
    "The Beginning",
    "First Steps",
    "New Powers",
    "The Challenge",
    "Unexpected Ally",
    "Rising Tension",
    "The Battle",
    "Revelation",
    "New Enemies",
    "Cliffhanger",
];

const PAGE_IMAGES: &[&str] = &[
    "https://images.pexels.com/photos/1741230/pexels-photo-1741230.jpeg",
    "https://images.pexels.com/photos/2662116/pexels-photo-2662116.jpeg",
    "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg",
    "https://images.pexels.com/photos/1370298/pexels-photo-1370298.jpeg",
];

const CHAPTERS_PER_COMIC: i64 = 10;

// 15 to 24 pages, keyed off the chapter number
fn page_count(chapter_number: i64) -> i64 {
    15 + (chapter_number % 10)
}

/// Reset the catalog and fill it with the bundled sample series.
pub async fn run<C, H, P>(
    comic_svc: &ComicService<C>,
    chapter_svc: &ChapterService<H>,
    page_svc: &PageService<P>,
) -> Result<(), anyhow::Error>
where
    C: ComicRepository,
    H: ChapterRepository,
    P: PageRepository,
{
    info!("clearing existing catalog...");
    for comic in comic_svc.fetch_all_comics().await? {
        comic_svc.delete_comic(comic.id).await?;
    }

    for seed in SEED_COMICS {
        let comic = comic_svc
            .create_comic(Comic {
                slug: seed.slug.to_string(),
                title: seed.title.to_string(),
                author: seed.author.to_string(),
                synopsis: seed.synopsis.to_string(),
                status: seed.status,
                cover_url: seed.cover_url.to_string(),
                genres: seed.genres.iter().map(|g| g.to_string()).collect(),
                ..Default::default()
            })
            .await?;

        let chapters: Vec<Chapter> = (1..=CHAPTERS_PER_COMIC)
            .map(|number| Chapter {
                comic_id: comic.id,
                number: number as f64,
                title: CHAPTER_TITLES
                    .get(number as usize - 1)
                    .map(|title| title.to_string())
                    .unwrap_or_else(|| format!("Chapter {number}")),
                ..Default::default()
            })
            .collect();
        chapter_svc.create_chapters(&chapters).await?;

        let inserted = chapter_svc.fetch_chapters_by_comic_id(comic.id).await?;
        info!("inserted {} chapters for {}", inserted.len(), comic.title);

        for chapter in &inserted {
            let pages: Vec<Page> = (1..=page_count(chapter.number as i64))
                .map(|page_number| Page {
                    chapter_id: chapter.id,
                    page_number,
                    image_url: PAGE_IMAGES[page_number as usize % PAGE_IMAGES.len()].to_string(),
                    ..Default::default()
                })
                .collect();

            page_svc.create_pages(chapter.id, &pages).await?;
        }

        info!("seeded {}", comic.title);
    }

    info!("catalog seeding completed");

    Ok(())
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_slugs_are_unique() {
        let slugs: HashSet<_> = SEED_COMICS.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), SEED_COMICS.len());
    }

    #[test]
    fn test_chapter_titles_cover_every_seeded_chapter() {
        assert_eq!(CHAPTER_TITLES.len() as i64, CHAPTERS_PER_COMIC);
    }

    #[test]
    fn test_page_count_stays_in_range() {
        for number in 1..=CHAPTERS_PER_COMIC {
            let count = page_count(number);
            assert!((15..=24).contains(&count));
        }
    }
}
