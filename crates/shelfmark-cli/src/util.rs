use shelfmark_core::{Book, Member};

pub fn format_book_line(book: &Book) -> String {
    let status = if book.is_available {
        "Available"
    } else {
        "Checked out"
    };
    format!(
        "{} - {} by {} [{}]",
        book.isbn, book.title, book.author, status
    )
}

pub fn format_search_line(book: &Book) -> String {
    format!("{} - {} by {}", book.isbn, book.title, book.author)
}

pub fn format_member_line(member: &Member) -> String {
    let borrowed = if member.books_borrowed.is_empty() {
        "none".to_string()
    } else {
        member
            .books_borrowed
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    };
    format!("{} - {} borrowed: {}", member.name, member.email, borrowed)
}

#[cfg(test)]
mod tests {
    use super::{format_book_line, format_member_line, format_search_line};
    use shelfmark_core::{Book, Member};

    #[test]
    fn book_line_shows_status() {
        let mut book = Book::new("Dune", "Frank Herbert", "111");
        assert_eq!(
            format_book_line(&book),
            "111 - Dune by Frank Herbert [Available]"
        );
        book.toggle_availability();
        assert_eq!(
            format_book_line(&book),
            "111 - Dune by Frank Herbert [Checked out]"
        );
        assert_eq!(format_search_line(&book), "111 - Dune by Frank Herbert");
    }

    #[test]
    fn member_line_joins_borrowed_isbns() {
        let mut member = Member::new("Alice", "alice@x.com").expect("valid member");
        assert_eq!(
            format_member_line(&member),
            "Alice - alice@x.com borrowed: none"
        );
        member.borrow("111");
        member.borrow("222");
        assert_eq!(
            format_member_line(&member),
            "Alice - alice@x.com borrowed: 111,222"
        );
    }
}
