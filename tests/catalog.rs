use filmoteka::{
    Catalog,
    entities::{movie_actor, movie_genre},
    models::{NewActor, NewMovie, NewReview},
};
use sea_orm::EntityTrait;

async fn catalog() -> Catalog {
    let _ = tracing_subscriber::fmt().with_env_filter("warn").try_init();
    let db = filmoteka::db::connect_and_migrate("sqlite::memory:")
        .await
        .expect("in-memory database");
    Catalog::new(db)
}

fn new_movie(title: &str, slug: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        slug: slug.to_string(),
        ..NewMovie::default()
    }
}

fn new_actor(name: &str) -> NewActor {
    NewActor {
        name: name.to_string(),
        age: 50,
        description: String::new(),
        image: "portrait.jpg".to_string(),
    }
}

fn new_review(name: &str, parent_id: Option<i32>) -> NewReview {
    NewReview {
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.to_string(),
        text: "Watched it twice.".to_string(),
        parent_id,
    }
}

#[tokio::test]
async fn duplicate_slugs_are_rejected() {
    let catalog = catalog().await;

    catalog.create_category("Films", "Feature films", "films").await.unwrap();
    assert!(catalog.create_category("Also films", "", "films").await.is_err());

    catalog.create_genre("Horror", "", "horror").await.unwrap();
    assert!(catalog.create_genre("More horror", "", "horror").await.is_err());

    catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    assert!(catalog.create_movie(new_movie("Alien again", "alien")).await.is_err());
}

#[tokio::test]
async fn movies_default_to_non_draft() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();

    assert!(!movie.draft);
    assert_eq!(movie.tagline, "");
    assert_eq!(movie.budget, 0);
    assert_eq!(movie.box_office_world, 0);
    assert_eq!(movie.category_id, None);
}

#[tokio::test]
async fn published_movies_exclude_drafts() {
    let catalog = catalog().await;

    catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    catalog
        .create_movie(NewMovie {
            draft: true,
            ..new_movie("Alien 5", "alien-5")
        })
        .await
        .unwrap();

    let published = catalog.published_movies().await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].slug, "alien");
}

#[tokio::test]
async fn rating_stars_list_highest_first() {
    let catalog = catalog().await;

    for value in [3, 1, 5] {
        catalog.create_star(value).await.unwrap();
    }

    let values: Vec<i16> =
        catalog.rating_stars().await.unwrap().iter().map(|star| star.value).collect();
    assert_eq!(values, vec![5, 3, 1]);
}

#[tokio::test]
async fn deleting_a_category_keeps_its_movies() {
    let catalog = catalog().await;

    let films = catalog.create_category("Films", "", "films").await.unwrap();
    let movie = catalog
        .create_movie(NewMovie {
            category_id: Some(films.id),
            ..new_movie("Alien", "alien")
        })
        .await
        .unwrap();
    assert_eq!(movie.category_id, Some(films.id));

    catalog.delete_category(films.id).await.unwrap();

    let movie = catalog.movie_by_slug("alien").await.unwrap().expect("movie survives");
    assert_eq!(movie.category_id, None);
}

#[tokio::test]
async fn deleting_a_movie_takes_its_children_along() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let star = catalog.create_star(5).await.unwrap();
    let genre = catalog.create_genre("Horror", "", "horror").await.unwrap();
    let weaver = catalog.create_actor(new_actor("Sigourney Weaver")).await.unwrap();

    catalog.set_cast(movie.id, &[weaver.id]).await.unwrap();
    catalog.set_genres(movie.id, &[genre.id]).await.unwrap();
    catalog.add_shot(movie.id, "Nostromo", "", "nostromo.jpg").await.unwrap();
    catalog.rate("10.0.0.1", star.id, movie.id).await.unwrap();
    catalog.add_review(movie.id, new_review("Ann", None)).await.unwrap();

    catalog.delete_movie(movie.id).await.unwrap();

    assert!(catalog.shots(movie.id).await.unwrap().is_empty());
    assert!(catalog.ratings(movie.id).await.unwrap().is_empty());
    assert!(catalog.top_level_reviews(movie.id).await.unwrap().is_empty());
    assert!(movie_actor::Entity::find().all(catalog.db()).await.unwrap().is_empty());
    assert!(movie_genre::Entity::find().all(catalog.db()).await.unwrap().is_empty());

    // The referenced rows on the far side of the junctions survive.
    assert!(catalog.actor_by_name("Sigourney Weaver").await.unwrap().is_some());
    assert_eq!(catalog.rating_stars().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_parent_review_orphans_the_replies() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let parent = catalog.add_review(movie.id, new_review("Ann", None)).await.unwrap();
    let child = catalog.add_review(movie.id, new_review("Bob", Some(parent.id))).await.unwrap();

    catalog.delete_review(parent.id).await.unwrap();

    let top = catalog.top_level_reviews(movie.id).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, child.id);
    assert_eq!(top[0].parent_id, None);
}

#[tokio::test]
async fn top_level_reviews_exclude_replies() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let ann = catalog.add_review(movie.id, new_review("Ann", None)).await.unwrap();
    let bob = catalog.add_review(movie.id, new_review("Bob", Some(ann.id))).await.unwrap();

    let top = catalog.top_level_reviews(movie.id).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, ann.id);

    let replies = catalog.replies(ann.id).await.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id, bob.id);
}

#[tokio::test]
async fn director_and_cast_sets_are_independent() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let scott = catalog.create_actor(new_actor("Ridley Scott")).await.unwrap();
    let weaver = catalog.create_actor(new_actor("Sigourney Weaver")).await.unwrap();

    catalog.set_directors(movie.id, &[scott.id]).await.unwrap();
    catalog.set_cast(movie.id, &[scott.id, weaver.id]).await.unwrap();

    let directors = catalog.directors(&movie).await.unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].name, "Ridley Scott");

    assert_eq!(catalog.cast(&movie).await.unwrap().len(), 2);

    // Setting a relation replaces it rather than appending.
    catalog.set_cast(movie.id, &[weaver.id]).await.unwrap();
    let cast = catalog.cast(&movie).await.unwrap();
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].name, "Sigourney Weaver");
}

#[tokio::test]
async fn genres_attach_through_the_junction() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let horror = catalog.create_genre("Horror", "", "horror").await.unwrap();
    let scifi = catalog.create_genre("Science fiction", "", "sci-fi").await.unwrap();

    catalog.set_genres(movie.id, &[horror.id, scifi.id]).await.unwrap();

    let mut names: Vec<String> =
        catalog.genres(&movie).await.unwrap().into_iter().map(|g| g.name).collect();
    names.sort();
    assert_eq!(names, vec!["Horror", "Science fiction"]);
}

#[tokio::test]
async fn locators_use_the_identity_keys() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    assert_eq!(movie.absolute_url(), "/movie/alien/");
    assert!(catalog.movie_by_slug("alien").await.unwrap().is_some());

    let scott = catalog.create_actor(new_actor("Ridley Scott")).await.unwrap();
    assert_eq!(scott.absolute_url(), "/actor/Ridley%20Scott/");
    assert!(catalog.actor_by_name("Ridley Scott").await.unwrap().is_some());
}

#[tokio::test]
async fn admin_labels_combine_relations() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let star = catalog.create_star(5).await.unwrap();
    assert_eq!(star.to_string(), "5");
    assert_eq!(movie.to_string(), "Alien");

    let rating = catalog.rate("10.0.0.1", star.id, movie.id).await.unwrap();
    assert_eq!(catalog.rating_label(&rating).await.unwrap(), "5 - Alien");

    let review = catalog.add_review(movie.id, new_review("Bob", None)).await.unwrap();
    assert_eq!(catalog.review_label(&review).await.unwrap(), "Bob - Alien");
}

#[tokio::test]
async fn repeat_votes_from_one_address_are_allowed() {
    let catalog = catalog().await;

    let movie = catalog.create_movie(new_movie("Alien", "alien")).await.unwrap();
    let star = catalog.create_star(5).await.unwrap();

    catalog.rate("10.0.0.1", star.id, movie.id).await.unwrap();
    catalog.rate("10.0.0.1", star.id, movie.id).await.unwrap();

    assert_eq!(catalog.ratings(movie.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn negative_figures_are_rejected() {
    let catalog = catalog().await;

    let result = catalog
        .create_actor(NewActor {
            age: -1,
            ..new_actor("Nobody")
        })
        .await;
    assert!(result.is_err());

    let result = catalog
        .create_movie(NewMovie {
            budget: -1,
            ..new_movie("Alien", "alien")
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn image_paths_live_under_their_upload_dirs() {
    let catalog = catalog().await;

    let weaver = catalog.create_actor(new_actor("Sigourney Weaver")).await.unwrap();
    assert_eq!(weaver.image, "actors/portrait.jpg");

    let movie = catalog
        .create_movie(NewMovie {
            poster: "alien.jpg".to_string(),
            ..new_movie("Alien", "alien")
        })
        .await
        .unwrap();
    assert_eq!(movie.poster, "movies/alien.jpg");

    let shot = catalog.add_shot(movie.id, "Nostromo", "", "nostromo.jpg").await.unwrap();
    assert_eq!(shot.image, "movie_shots/nostromo.jpg");
}
