/// (key, Vietnamese, English)
pub(crate) const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.home", "Trang Chủ", "Home"),
    ("nav.menu", "Thực Đơn", "Menu"),
    ("nav.blog", "Tin Tức", "Blog"),
    ("nav.contact", "Liên Hệ", "Contact"),
    ("nav.booking", "Đặt Bàn", "Booking"),
    // Homepage
    (
        "hero.slogan1",
        "Sống một đời \"Không phí\"",
        "Live a Life \"Without Waste\"",
    ),
    (
        "hero.slogan2",
        "Cà Phê Bên Lề – Chuyện Đời Bên Tai",
        "Roadside Coffee – Life Stories by Your Side",
    ),
    ("hero.cta", "Khám Phá Menu", "Explore Menu"),
    ("hero.booking", "Đặt Bàn Ngay", "Book Now"),
    // Featured products
    ("featured.title", "Sản Phẩm Nổi Bật", "Featured Products"),
    (
        "featured.subtitle",
        "Những món cà phê đặc biệt được yêu thích nhất",
        "Most beloved specialty coffee drinks",
    ),
    // Latest posts
    ("blog.title", "Tin Tức Mới Nhất", "Latest News"),
    (
        "blog.subtitle",
        "Khám phá những câu chuyện thú vị về cà phê",
        "Discover interesting stories about coffee",
    ),
    ("blog.readMore", "Đọc Thêm", "Read More"),
    // About
    ("about.title", "Về Sống KOFFI", "About Sống KOFFI"),
    (
        "about.description",
        "Chào mừng đến với Sống KOFFI - nơi mang đến cho bạn trải nghiệm cà phê đích thực với không gian ấm cúng và những câu chuyện đời thường.",
        "Welcome to Sống KOFFI - where we bring you authentic coffee experiences with cozy atmosphere and everyday life stories.",
    ),
    // Contact
    ("contact.title", "Liên Hệ", "Contact Us"),
    (
        "contact.address",
        "770B Sư Vạn Hạnh, Phường 12, Quận 10, TP. HCM",
        "770B Su Van Hanh, Ward 12, District 10, Ho Chi Minh City",
    ),
    ("contact.phone", "Điện thoại", "Phone"),
    ("contact.email", "Email", "Email"),
    ("contact.hours", "Giờ mở cửa", "Opening Hours"),
    (
        "contact.hours.value",
        "6:00 - 22:00 (Thứ 2 - Chủ Nhật)",
        "6:00 AM - 10:00 PM (Mon - Sun)",
    ),
    // Menu
    ("menu.categories.espresso", "Espresso", "Espresso"),
    ("menu.categories.coldbrew", "Cold Brew", "Cold Brew"),
    ("menu.categories.signature", "Đặc Biệt", "Signature"),
    ("menu.categories.pastry", "Bánh Ngọt", "Pastries"),
    // Booking
    ("booking.title", "Đặt Bàn", "Make a Reservation"),
    ("booking.form.name", "Họ và tên", "Full Name"),
    ("booking.form.phone", "Số điện thoại", "Phone Number"),
    ("booking.form.date", "Ngày", "Date"),
    ("booking.form.time", "Giờ", "Time"),
    ("booking.form.guests", "Số khách", "Number of Guests"),
    ("booking.form.area", "Khu vực", "Area"),
    ("booking.form.area.indoor", "Trong nhà", "Indoor"),
    ("booking.form.area.outdoor", "Ngoài trời", "Outdoor"),
    ("booking.form.area.sofa", "Khu Sofa", "Sofa Area"),
    ("booking.form.notes", "Ghi chú", "Notes"),
    ("booking.form.submit", "Đặt Bàn", "Book Table"),
    // Authentication
    ("auth.login", "Đăng Nhập", "Sign In"),
    ("auth.signup", "Đăng Ký", "Sign Up"),
    ("auth.logout", "Đăng Xuất", "Sign Out"),
    ("auth.profile", "Hồ Sơ", "Profile"),
    ("auth.orders", "Đơn Hàng", "Orders"),
    ("auth.favorites", "Yêu Thích", "Favorites"),
    ("auth.settings", "Cài Đặt", "Settings"),
    ("auth.admin", "Quản Trị", "Admin"),
    // Common
    ("common.loading", "Đang tải...", "Loading..."),
    ("common.error", "Có lỗi xảy ra", "An error occurred"),
    ("common.success", "Thành công!", "Success!"),
    ("common.viewAll", "Xem Tất Cả", "View All"),
    ("common.close", "Đóng", "Close"),
    ("common.submit", "Gửi", "Submit"),
];
