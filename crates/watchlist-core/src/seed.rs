use watchlist_models::{WatchListEntry, WatchStatus};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    status: WatchStatus,
    progress: u32,
    total_episodes: u32,
    rating: Option<u8>,
    genre: &str,
    year: u32,
    image: &str,
    description: &str,
    studio: &str,
    score: f32,
    popularity: u32,
    aired: &str,
    duration: &str,
) -> WatchListEntry {
    WatchListEntry {
        id: id.to_string(),
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        image: image.to_string(),
        description: Some(description.to_string()),
        studio: Some(studio.to_string()),
        total_episodes,
        status,
        progress,
        rating,
        review: None,
        score: Some(score),
        popularity: Some(popularity),
        aired: Some(aired.to_string()),
        duration: Some(duration.to_string()),
    }
}

/// Starting contents of a fresh personal list
pub fn seed_entries() -> Vec<WatchListEntry> {
    vec![
        entry(
            "1",
            "Attack on Titan",
            WatchStatus::Completed,
            87,
            87,
            Some(9),
            "Action",
            2013,
            "/anime-poster.png",
            "Humanity fights for survival against giant humanoid Titans that have brought civilization to the brink of extinction.",
            "Mappa",
            9.0,
            1,
            "Apr 2013 - Nov 2023",
            "24 min per ep",
        ),
        entry(
            "2",
            "Demon Slayer",
            WatchStatus::Watching,
            8,
            11,
            None,
            "Action",
            2019,
            "/demon-slayer-anime-poster.png",
            "A young boy becomes a demon slayer to avenge his family and cure his sister who has been turned into a demon.",
            "Ufotable",
            8.7,
            3,
            "Apr 2019 - Present",
            "24 min per ep",
        ),
        entry(
            "3",
            "Jujutsu Kaisen",
            WatchStatus::PlanToWatch,
            0,
            24,
            None,
            "Action",
            2020,
            "/jujutsu-kaisen-poster.png",
            "A high school student joins a secret organization of Jujutsu Sorcerers to kill a powerful Curse named Ryomen Sukuna.",
            "Mappa",
            8.5,
            2,
            "Oct 2020 - Mar 2021",
            "24 min per ep",
        ),
        entry(
            "4",
            "Your Name",
            WatchStatus::Completed,
            1,
            1,
            Some(10),
            "Romance",
            2016,
            "/your-name-anime-movie-poster.png",
            "Two teenagers share a profound, magical connection upon discovering they are swapping bodies.",
            "CoMix Wave Films",
            8.4,
            4,
            "Aug 2016",
            "106 min",
        ),
        entry(
            "5",
            "One Piece",
            WatchStatus::OnHold,
            450,
            1000,
            Some(8),
            "Adventure",
            1999,
            "/anime-poster.png",
            "Monkey D. Luffy explores the Grand Line with his diverse crew of pirates, searching for the ultimate treasure known as 'One Piece'.",
            "Toei Animation",
            9.1,
            5,
            "Oct 1999 - Present",
            "24 min per ep",
        ),
    ]
}
