use std::fs;
use std::path::Path;

use tempfile::tempdir;

use stance_datasets::{Catalog, DatasetError, LoadOptions, Split, Task};

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed_mtcsd(root: &Path) {
    write_file(
        root,
        "MT-CSD-main/data/Bitcoin/text.csv",
        "id,text\n1,thread root\n2,first reply\n3,second reply\n4,lone post\n",
    );
    write_file(
        root,
        "MT-CSD-main/data/Bitcoin/test.json",
        r#"[{"index":[1,2,3],"stance":"favor"},{"index":[4],"stance":"none"}]"#,
    );
}

#[test]
fn mtcsd_chains_resolve_texts_oldest_ancestor_first() {
    let temp = tempdir().unwrap();
    seed_mtcsd(temp.path());
    let table = Catalog::new(temp.path())
        .load("mtcsd", &LoadOptions::default().with_group(false))
        .unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.has_parent_texts);

    let chained = &table.records[0];
    assert_eq!(chained.text, "second reply");
    assert_eq!(chained.targets, vec!["Bitcoin"]);
    assert_eq!(chained.stances, vec![Some("favor".to_string())]);
    assert_eq!(
        chained.parent_texts.as_deref(),
        Some(&["thread root".to_string(), "first reply".to_string()][..])
    );

    let lone = &table.records[1];
    assert_eq!(lone.text, "lone post");
    assert_eq!(lone.stances, vec![Some("neutral".to_string())]);
    assert_eq!(lone.parent_texts, Some(Vec::new()));
}

#[test]
fn mtcsd_drops_threads_deeper_than_the_ancestor_bound() {
    let temp = tempdir().unwrap();
    let mut csv = String::from("id,text\n");
    for i in 1..=7 {
        csv.push_str(&format!("{i},post {i}\n"));
    }
    write_file(temp.path(), "MT-CSD-main/data/Bitcoin/text.csv", &csv);
    write_file(
        temp.path(),
        "MT-CSD-main/data/Bitcoin/test.json",
        r#"[{"index":[1,2,3,4,5,6,7],"stance":"favor"},{"index":[6,7],"stance":"against"}]"#,
    );
    let table = Catalog::new(temp.path())
        .load("mtcsd", &LoadOptions::default().with_group(false))
        .unwrap();

    // The seven-post chain reaches offset -6 and is dropped whole.
    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].text, "post 7");
}

#[test]
fn mtcsd_validation_split_reads_the_valid_file() {
    let temp = tempdir().unwrap();
    seed_mtcsd(temp.path());
    let err = Catalog::new(temp.path())
        .load("mtcsd", &LoadOptions::default().with_split(Split::Val))
        .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::UnknownSplit { dataset, split } if dataset == "mtcsd" && split == "val"
    ));
}

#[test]
fn ctsdt_branches_rank_by_id_value() {
    let temp = tempdir().unwrap();
    // Two rows, both kept in the train slice (floor(0.8 * 2) = 1 keeps one;
    // use a pool small enough that the shuffle cannot split the chain).
    write_file(
        temp.path(),
        "CTSDT/labeled_data.csv",
        "id,text,label,sub_branch\n5,reply post,FAVOR,\"['2', '5']\"\n2,root post,AGAINST,\n",
    );
    let table = Catalog::new(temp.path())
        .load("ctsdt", &LoadOptions::default().with_split(Split::Train).with_group(false))
        .unwrap();

    assert_eq!(table.len(), 1);
    let record = &table.records[0];
    // Whichever row survives the slice, its chain resolves against the
    // sliced partition only.
    if record.text == "reply post" {
        assert!(
            record.parent_texts == Some(Vec::new())
                || record.parent_texts.as_deref() == Some(&["root post".to_string()][..])
        );
    } else {
        assert_eq!(record.parent_texts, Some(Vec::new()));
    }
}

fn seed_stanceosaurus(root: &Path) {
    write_file(
        root,
        "stanceosaurus/english/claim_a/test/threads.json",
        r#"[{"claim":"Claim A","root_tweet":{"text":"root tweet","stance":"Supporting","children":[{"text":"reply tweet","stance":"Dicussing"}]}}]"#,
    );
    write_file(
        root,
        "stanceosaurus/english/claim_a/train/threads.json",
        r#"[{"claim":"Claim A","root_tweet":{"text":"train tweet","stance":"Refuting"}}]"#,
    );
    write_file(
        root,
        "stanceosaurus/english/claim_a/masked.json",
        "not even json",
    );
    write_file(
        root,
        "stanceosaurus/hindi/claims.json",
        r#"[{"claim":"Claim H","root_tweet":{"text":"hindi root","leaning":"Supporting","children":[{"text":"hindi reply","leaning":"Discussing"}]}}]"#,
    );
}

#[test]
fn stanceosaurus_filters_english_by_split_directory_and_reslices_the_rest() {
    let temp = tempdir().unwrap();
    seed_stanceosaurus(temp.path());
    let options = LoadOptions::default()
        .with_group(false)
        .with_task(Task::ClaimEntailment5Way);
    let table = Catalog::new(temp.path()).load("stanceosaurus", &options).unwrap();

    // English contributes the test directory only; hindi is unsplit, so its
    // one surviving post lands in the trailing test slice.
    assert_eq!(table.len(), 3);
    assert_eq!(table.records[0].text, "root tweet");
    assert_eq!(table.records[0].targets, vec!["Claim A"]);
    assert_eq!(table.records[0].stances, vec![Some("supporting".to_string())]);

    // The annotation misspelling is corrected before mapping.
    assert_eq!(table.records[1].text, "reply tweet");
    assert_eq!(table.records[1].stances, vec![Some("discussing".to_string())]);
    assert_eq!(
        table.records[1].parent_texts.as_deref(),
        Some(&["root tweet".to_string()][..])
    );

    // Hindi annotations ride in the leaning field.
    assert_eq!(table.records[2].text, "hindi root");
    assert_eq!(table.records[2].stances, vec![Some("supporting".to_string())]);
}

#[test]
fn stanceosaurus_two_way_task_folds_leaning_support_in() {
    let temp = tempdir().unwrap();
    write_file(
        temp.path(),
        "stanceosaurus/english/claim_a/test/threads.json",
        r#"[{"claim":"Claim A","root_tweet":{"text":"root tweet","stance":"Discussing","leaning":"Supporting","children":[{"text":"reply tweet","stance":"Refuting"}]}}]"#,
    );
    let options = LoadOptions::default()
        .with_group(false)
        .with_task(Task::ClaimEntailment2Way);
    let table = Catalog::new(temp.path()).load("stanceosaurus", &options).unwrap();

    assert_eq!(table.records[0].stances, vec![Some("supporting".to_string())]);
    assert_eq!(table.records[1].stances, vec![Some("other".to_string())]);
}

#[test]
fn hindi_promotion_consumes_the_leaning_field() {
    let temp = tempdir().unwrap();
    write_file(
        temp.path(),
        "stanceosaurus/hindi/claims.json",
        r#"[{"claim":"Claim H","root_tweet":{"text":"hindi root","leaning":"Refuting","children":[{"text":"hindi reply","leaning":"Discussing"}]}}]"#,
    );
    // Seven-way synthesizes `Leaning {x}` from a surviving leaning value, so
    // a promoted hindi annotation must come through plain.
    let options = LoadOptions::default()
        .with_group(false)
        .with_task(Task::ClaimEntailment7Way);
    let table = Catalog::new(temp.path()).load("stanceosaurus", &options).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].text, "hindi root");
    assert_eq!(table.records[0].stances, vec![Some("refuting".to_string())]);
}

#[test]
fn stanceosaurus_requires_a_task() {
    let temp = tempdir().unwrap();
    let err = Catalog::new(temp.path())
        .load("stanceosaurus", &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::UnsupportedTask { dataset, task }
            if dataset == "stanceosaurus" && task == "none"
    ));
}

#[test]
fn stanceosaurus_drops_posts_past_the_ancestor_bound() {
    let temp = tempdir().unwrap();
    // A strictly nested chain of seven posts; the deepest has six ancestors
    // and must be dropped.
    let mut tree = String::from(r#"{"text":"p7","stance":"Supporting"}"#);
    for i in (1..=6).rev() {
        tree = format!(r#"{{"text":"p{i}","stance":"Supporting","children":[{tree}]}}"#);
    }
    write_file(
        temp.path(),
        "stanceosaurus/english/claim_a/test/threads.json",
        &format!(r#"[{{"claim":"Claim A","root_tweet":{tree}}}]"#),
    );
    let options = LoadOptions::default()
        .with_group(false)
        .with_task(Task::ClaimEntailment5Way);
    let table = Catalog::new(temp.path()).load("stanceosaurus", &options).unwrap();

    assert_eq!(table.len(), 6);
    assert!(table.records.iter().all(|record| record.text != "p7"));
}
