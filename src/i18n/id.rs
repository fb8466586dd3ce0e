use super::*;

pub(super) static MESSAGES: Messages = Messages {
    welcome: Welcome {
        title: "🤖 Selamat datang di AI Chatbot!",
        description: "Halo! Saya adalah chatbot AI yang didukung oleh ChatGPT. Saya siap membantu Anda dengan berbagai pertanyaan dan percakapan.",
        usage: "Cara menggunakan:",
        ai_mode: "• Ketik /ai untuk mengaktifkan mode AI ChatGPT",
        ai_off: "• Ketik /ai_off untuk menonaktifkan mode AI",
        weather: "• Tanya tentang cuaca atau workout untuk info otomatis",
        help: "• Ketik /help untuk melihat bantuan",
        start: "Silakan mulai percakapan dengan mengirim pesan!",
    },
    help: Help {
        title: "📋 Bantuan AI Chatbot",
        commands: "Perintah yang tersedia:",
        features: "Fitur:",
        feature_lines: [
            "• 💬 Percakapan natural dengan AI (perlu aktivasi)",
            "• 🧠 Menyimpan konteks percakapan",
            "• 🌍 Mendukung bahasa Indonesia dan Inggris",
            "• ⚡ Respons cepat dan akurat",
            "• 🌤️ Informasi cuaca real-time",
            "• 🏃‍♂️ Pengingat olahraga otomatis",
            "• 🤖 Mode AI on/off sesuai kebutuhan",
        ],
        tips: "Tips:",
        ai_activation: "• Aktifkan mode AI dengan /ai untuk chat dengan ChatGPT",
        weather_auto: "• Tanya tentang 'cuaca' atau 'workout' untuk info otomatis",
        reminders: "• Pengingat olahraga berjalan otomatis setiap Sabtu",
        start_message: "Mulai percakapan dengan mengirim pesan apa saja!",
    },
    commands: CommandList {
        start: "• /start - Memulai percakapan",
        help: "• /help - Menampilkan bantuan ini",
        clear: "• /clear - Menghapus history percakapan",
        ai: "• /ai - Aktifkan mode AI ChatGPT",
        ai_off: "• /ai_off - Nonaktifkan mode AI ChatGPT",
        weather: "• /weather - Cek cuaca saat ini",
        workout: "• /workout - Cek cuaca untuk olahraga",
        reminder: "• /reminder - Aktifkan pengingat olahraga hari Sabtu",
        stop_reminder: "• /stop_reminder - Hentikan pengingat olahraga",
    },
    replies: Replies {
        history_cleared: "🗑️ History percakapan telah dihapus. Silakan mulai percakapan baru!",
        ai_mode_enabled: "🤖 Mode AI ChatGPT diaktifkan!\n\nSekarang semua pesan Anda akan diproses oleh ChatGPT. Ketik /ai_off untuk menonaktifkan.",
        ai_mode_disabled: "🚫 Mode AI ChatGPT dinonaktifkan!\n\nSekarang bot akan merespons hanya untuk command khusus dan query cuaca/workout.",
        weather_unavailable: "❌ Layanan cuaca tidak tersedia. API key cuaca belum dikonfigurasi.",
        weather_error: "❌ Maaf, tidak bisa mengambil data cuaca saat ini. Silakan coba lagi nanti.",
        workout_error: "❌ Maaf, tidak bisa mengecek cuaca untuk olahraga saat ini. Silakan coba lagi nanti.",
        reminder_enabled: "🏃‍♂️ *Pengingat Olahraga Diaktifkan!*",
        reminder_already_active: "✅ Pengingat olahraga sudah aktif! Anda akan mendapat pengingat setiap hari Sabtu.",
        reminder_stopped: "🛑 Pengingat olahraga telah dihentikan.",
        reminder_not_active: "⚠️ Pengingat olahraga tidak sedang aktif.",
        reminder_error: "❌ Gagal mengatur pengingat. Silakan coba lagi nanti.",
        quota_exceeded: "⚠️ *Quota OpenAI terlampaui*\n\nMaaf, quota penggunaan OpenAI sudah habis untuk bulan ini. Silakan coba lagi bulan depan atau hubungi administrator.",
        connection_error: "⚠️ Koneksi ke ChatGPT bermasalah. Silakan coba lagi dalam beberapa saat.",
        general_error: "❌ Maaf, terjadi kesalahan saat memproses pesan. Silakan coba lagi.",
        unknown_command: "❓ Perintah tidak dikenali. Ketik /help untuk melihat daftar perintah yang tersedia.",
        ai_default_response: "Maaf, saya tidak bisa memproses permintaan Anda saat ini. Silakan coba lagi nanti.",
    },
    ai_off_hints: [
        "🤖 Halo! Saya adalah AI chatbot. Aktifkan mode AI dengan /ai untuk chat dengan ChatGPT.",
        "💡 Tip: Ketik /ai untuk mengaktifkan mode ChatGPT, atau tanya tentang cuaca/workout untuk info otomatis.",
        "📝 Pesan Anda diterima! Gunakan /ai untuk chat AI atau /help untuk bantuan.",
        "🔔 Mode AI sedang nonaktif. Ketik /ai untuk mengaktifkan ChatGPT atau /weather untuk cek cuaca.",
    ],
    persona_prompt: "Kamu adalah asisten AI yang ramah dan membantu. Jawab pertanyaan dengan bahasa Indonesia yang natural dan informatif.",
    weather: WeatherLabels {
        current_weather: "Cuaca Saat Ini",
        location: "📍 *Lokasi:*",
        condition: "*Kondisi:*",
        temperature: "🌡️ *Suhu:*",
        feels_like: "terasa",
        humidity: "💧 *Kelembapan:*",
        wind_speed: "🌪️ *Kecepatan Angin:*",
        visibility: "👁️ *Visibilitas:*",
        time: "🕒 *Waktu:*",
        data_source: "Data diambil dari",
        weather_in: "Cuaca di",
        good_for_workout: "🏃‍♂️ *Cuaca Bagus untuk Olahraga!*",
        not_good_for_workout: "🏠 *Cuaca Kurang Ideal untuk Olahraga Outdoor*",
        recommendations: "*Rekomendasi:*",
        indoor_alternatives: "*Alternatif olahraga indoor:*",
        use_proper_clothing: "• Gunakan pakaian olahraga yang sesuai",
        stay_hydrated: "• Jangan lupa minum air yang cukup",
        warm_up: "• Lakukan pemanasan sebelum olahraga",
        choose_right_time: "• Pilih waktu yang tepat untuk berolahraga",
        home_workout: "• 🏋️‍♂️ Workout di rumah",
        yoga: "• 🧘‍♀️ Yoga atau stretching",
        dance: "• 💃 Dance workout",
        shadow_boxing: "• 🥊 Shadow boxing",
        active_games: "• 🎯 Bermain game aktif di rumah",
        keep_spirit: "Tetap semangat berolahraga! 💪",
        enjoy_workout: "Selamat berolahraga! 💪🔥",
    },
    suitability: SuitabilityTexts {
        perfect: "Cuaca sangat bagus untuk jogging!",
        rainy: "Sedang hujan, lebih baik olahraga di dalam ruangan",
        thunderstorm: "Ada badai petir, tidak aman untuk olahraga outdoor",
        too_cold: "Cuaca terlalu dingin untuk jogging",
        too_hot: "Cuaca terlalu panas, lebih baik olahraga sore hari",
        high_humidity: "Kelembaban sangat tinggi, mungkin tidak nyaman untuk jogging",
        strong_wind: "Angin terlalu kencang untuk jogging",
    },
    reminder: ReminderTexts {
        weekend_time: "✅ Anda akan mendapat pengingat olahraga setiap *hari Sabtu* jam",
        location: "📍 Lokasi cuaca:",
        timezone: "🕐 Timezone:",
        weather_check: "Bot akan mengecek cuaca terlebih dahulu dan memberikan rekomendasi olahraga yang sesuai.",
        stop_instruction: "Gunakan /stop\\_reminder untuk menghentikan pengingat.",
    },
    weekly: WeeklyTexts {
        title_good: "🏃‍♂️ *Pengingat Olahraga Weekend!*",
        title_bad: "🏠 *Pengingat Olahraga Weekend!*",
        basic: WeeklyBasic {
            title: "🏃‍♂️ *Pengingat Olahraga Weekend!*",
            greeting: "Halo! Ini hari Sabtu, saatnya berolahraga! 💪",
            dont_forget: "Jangan lupa untuk:",
            warm_up: "• Pemanasan sebelum olahraga",
            stay_hydrated: "• Minum air yang cukup",
            comfortable_shoes: "• Gunakan sepatu olahraga yang nyaman",
            enjoy: "Selamat berolahraga! 🔥",
        },
        good: WeeklyGood {
            greeting: "Halo! Ini hari Sabtu dan cuaca sedang bagus untuk jogging!",
            tips_title: "*Tips untuk jogging hari ini:*",
            weather_clothing: "• Gunakan pakaian yang sesuai dengan cuaca",
            bring_water: "• Bawa botol air minum",
            warm_up_cool_down: "• Jangan lupa pemanasan dan pendinginan",
            choose_route: "• Pilih rute yang aman dan nyaman",
            lets_start: "Yuk mulai jogging! 🏃‍♂️💨",
        },
        bad: WeeklyBad {
            greeting: "Halo! Ini hari Sabtu, tapi cuaca tidak mendukung untuk jogging.",
            alternatives_title: "*Alternatif olahraga indoor:*",
            home_workout: "• 🏋️‍♂️ Workout di rumah (push up, sit up, squat)",
            yoga: "• 🧘‍♀️ Yoga atau stretching",
            dance_workout: "• 💃 Dance workout dengan musik favoritmu",
            shadow_boxing: "• 🥊 Shadow boxing atau martial arts",
            active_games: "• 🎯 Bermain game aktif di rumah",
            keep_spirit: "Tetap semangat berolahraga! 💪🔥",
        },
        fallback: WeeklyFallback {
            title: "🏃‍♂️ *Pengingat Olahraga Weekend!*",
            greeting: "Halo! Ini hari Sabtu, saatnya berolahraga! 💪",
            weather_error: "Maaf, tidak bisa mengecek cuaca saat ini. Tapi jangan biarkan itu menghentikan semangat olahraga Anda!",
            suggestions: "*Saran olahraga:*",
            check_weather: "• Cek cuaca di luar dulu",
            sunny_activity: "• Jika cerah, jogging atau bersepeda",
            rainy_activity: "• Jika hujan, workout di dalam rumah",
            enjoy: "Selamat berolahraga! 🔥",
        },
    },
};
