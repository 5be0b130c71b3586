/// `PathInfo` usage example
use pathinfo::PathInfo;

fn main() {
    // Decode path information such as `/cgi-bin/app/user-42/tab-posts/tag-a/tag-b`
    let mut params = PathInfo::new("/user-42/tab-posts/tag-rust/tag-cargo/");

    // Get values
    println!("names: {:?}", params.names()); // ["user", "tab", "tag"]
    println!("user: {:?}", params.get("user")); // Some("42")
    println!("tags: {:?}", params.get_all("tag")); // ["rust", "cargo"]
    println!();

    // Set (replaces every value of the field)
    params.set_one("tab", "comments");
    params.set_one("page", "2");
    println!("After set: {params}"); // /user-42/tab-comments/tag-rust/tag-cargo/page-2
    println!();

    // Iterate over all fields
    println!("All fields:");
    for (name, values) in params.iter() {
        println!("  {name} = {values:?}");
    }
}
